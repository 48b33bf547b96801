//! Plain data row types produced by the exporters.

use epi_net::Network;
use serde::Serialize;

/// One individual in a graph export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRow {
    pub id:       u32,
    /// Comma-joined category parts.
    pub category: String,
    /// Numeric state id, indexing the network's `StateSet`.
    pub state:    u16,
}

/// One directed edge in a graph export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkRow {
    pub source: u32,
    pub target: u32,
    pub weight: f32,
}

/// A whole network flattened to rows, ready for serialization.
///
/// Symmetric networks yield two links per contact pair, one in each
/// direction, mirroring the adjacency maps exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<NodeRow>,
    pub links: Vec<LinkRow>,
}

impl GraphExport {
    /// Flatten `network` into node and directed link rows.
    pub fn from_network(network: &Network) -> Self {
        let nodes = network
            .individuals
            .iter()
            .map(|person| NodeRow {
                id:       person.id.0,
                category: person.category.to_string(),
                state:    person.state.0,
            })
            .collect();

        let links = network
            .individuals
            .iter()
            .flat_map(|person| {
                person.contacts.iter().map(|(&other, &weight)| LinkRow {
                    source: person.id.0,
                    target: other.0,
                    weight,
                })
            })
            .collect();

        GraphExport { nodes, links }
    }
}
