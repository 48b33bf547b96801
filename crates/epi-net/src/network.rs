//! Contact network representation.
//!
//! # Data layout
//!
//! Individuals live in one `Vec` indexed by `PersonId` (id == position).
//! Each individual owns its adjacency as an insertion-ordered map, so the
//! day loop's neighbor iteration order — which the deterministic draw
//! sequence depends on — is the order edges were created.  The partition
//! index and the active-infection working set are held alongside.
//!
//! `Network` is `Clone`, and a clone is a true deep copy: branched what-if
//! simulations share no mutable structure with the original.

use epi_core::{Category, PersonId, SimRng, StateId, StateSet};
use indexmap::IndexMap;

use crate::{Individual, NetError, NetResult, individual::DEFAULT_WEIGHT};

/// A synthesized population and its contact graph.
///
/// All fields are `pub` for direct access on hot paths.  Do not construct
/// directly; use [`NetworkBuilder`][crate::NetworkBuilder] or
/// [`Network::uniform_random`].
#[derive(Clone, Debug)]
pub struct Network {
    /// All individuals, indexed by `PersonId` (id == position).
    pub individuals: Vec<Individual>,

    /// Category → member ids, in the order categories were declared.
    /// Every declared category is present, including empty ones.
    pub partition: IndexMap<Category, Vec<PersonId>>,

    /// The active-infection working set, mutated every simulated day.
    /// Order matters: it is the day loop's processing order.
    pub infectious: Vec<PersonId>,

    /// The ordered states individuals can be in.
    pub states: StateSet,

    /// Whether edges are mirrored: an edge at A pointing to B implies the
    /// reciprocal at B, and both are removed together.
    pub symmetric: bool,
}

impl Network {
    // ── Construction ──────────────────────────────────────────────────────

    /// Uniform/Poisson synthesis: every individual gets a uniformly chosen
    /// category from `categories` (unweighted), then `Poisson(mean_degree)`
    /// edges to uniformly random others, reciprocal always added.
    ///
    /// No friendship table is consulted; the result is always symmetric.
    /// Self-loop draws are skipped, not retried, so realized degrees run
    /// slightly below the mean.
    pub fn uniform_random(
        population:  usize,
        mean_degree: f64,
        categories:  &[Category],
        states:      StateSet,
        rng:         &mut SimRng,
    ) -> NetResult<Network> {
        if population == 0 {
            return Err(NetError::Config("population must be positive".to_string()));
        }
        if categories.is_empty() {
            return Err(NetError::Config(
                "uniform synthesis needs at least one category".to_string(),
            ));
        }
        for (i, a) in categories.iter().enumerate() {
            if categories[i + 1..].contains(a) {
                return Err(NetError::Config(format!("duplicate category {a}")));
            }
        }
        if !mean_degree.is_finite() || mean_degree < 0.0 {
            return Err(NetError::Config(format!(
                "mean degree {mean_degree} must be finite and non-negative"
            )));
        }

        let mut partition: IndexMap<Category, Vec<PersonId>> = categories
            .iter()
            .map(|c| (c.clone(), Vec::new()))
            .collect();
        let mut individuals = Vec::with_capacity(population);
        for i in 0..population {
            let id = PersonId(i as u32);
            let category = categories[rng.gen_range(0..categories.len())].clone();
            partition.entry(category.clone()).or_default().push(id);
            individuals.push(Individual::new(id, category, StateId::SUSCEPTIBLE));
        }

        let mut network = Network {
            individuals,
            partition,
            infectious: Vec::new(),
            states,
            symmetric: true,
        };
        for i in 0..population {
            let k = rng.poisson(mean_degree);
            for _ in 0..k {
                let other = rng.gen_range(0..population);
                if other == i {
                    continue;
                }
                network.add_edge(PersonId(i as u32), PersonId(other as u32), DEFAULT_WEIGHT);
            }
        }
        Ok(network)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn population(&self) -> usize {
        self.individuals.len()
    }

    /// Number of stored directed edges (a mirrored pair counts twice).
    pub fn edge_count(&self) -> usize {
        self.individuals.iter().map(Individual::degree).sum()
    }

    /// Degree of one individual.
    #[inline]
    pub fn degree(&self, id: PersonId) -> usize {
        self.individuals[id.index()].degree()
    }

    // ── Edge mutation ─────────────────────────────────────────────────────

    /// Record an edge from `a` to `b` (and the mirror when symmetric).
    /// Self-loops are rejected silently.
    pub fn add_edge(&mut self, a: PersonId, b: PersonId, weight: f32) {
        if a == b {
            return;
        }
        self.individuals[a.index()].add_contact(b, weight);
        if self.symmetric {
            self.individuals[b.index()].add_contact(a, weight);
        }
    }

    /// Remove the edge from `a` to `b`, and the mirror when symmetric.
    /// Returns `true` if `a → b` existed.
    pub fn remove_edge(&mut self, a: PersonId, b: PersonId) -> bool {
        let removed = self.individuals[a.index()].remove_contact(b);
        if self.symmetric {
            self.individuals[b.index()].remove_contact(a);
        }
        removed
    }

    // ── Census queries ────────────────────────────────────────────────────

    /// Per-category member counts, in declared order.
    pub fn partition_counts(&self) -> Vec<(&Category, usize)> {
        self.partition
            .iter()
            .map(|(category, members)| (category, members.len()))
            .collect()
    }

    /// Census of one individual's contacts by neighbor category, in the
    /// order the categories are first encountered in its adjacency.
    pub fn contact_categories(&self, id: PersonId) -> IndexMap<&Category, usize> {
        let mut counts = IndexMap::new();
        for &other in self.individuals[id.index()].contacts.keys() {
            let category = &self.individuals[other.index()].category;
            *counts.entry(category).or_insert(0) += 1;
        }
        counts
    }
}
