//! Edge-deletion intervention operators.
//!
//! Both operators visit every individual in id order, draw how many of its
//! edges to cut as `Poisson(k)` capped at its current degree, and sample
//! that many contacts uniformly without replacement.  Removal goes through
//! [`Network::remove_edge`], so reciprocal edges fall together on symmetric
//! networks.  The returned count is the number of removal events — a
//! mirrored pair counts once.

use epi_core::{PersonId, SimRng};

use crate::Network;

/// Remove randomly sampled edges across the whole network.
///
/// `k` is the Poisson mean per individual; `k ≤ 0` removes nothing.
/// Returns the number of edges removed.
pub fn remove_random_edges(network: &mut Network, k: f64, rng: &mut SimRng) -> usize {
    let mut removed = 0;
    for i in 0..network.individuals.len() {
        for other in sample_contacts(network, i, k, rng) {
            if network.remove_edge(PersonId(i as u32), other) {
                removed += 1;
            }
        }
    }
    removed
}

/// Remove randomly sampled **cross-category** edges: an edge whose far
/// endpoint shares the individual's category is sampled but left intact.
///
/// Models a heterophily-targeted distancing intervention.  Returns the
/// number of edges removed.
pub fn remove_cross_category_edges(network: &mut Network, k: f64, rng: &mut SimRng) -> usize {
    let mut removed = 0;
    for i in 0..network.individuals.len() {
        for other in sample_contacts(network, i, k, rng) {
            if network.individuals[other.index()].category == network.individuals[i].category {
                continue;
            }
            if network.remove_edge(PersonId(i as u32), other) {
                removed += 1;
            }
        }
    }
    removed
}

/// Draw `min(Poisson(k), degree)` of individual `i`'s contacts, uniformly
/// without replacement.
fn sample_contacts(network: &Network, i: usize, k: f64, rng: &mut SimRng) -> Vec<PersonId> {
    let contacts = &network.individuals[i].contacts;
    let n = (rng.poisson(k) as usize).min(contacts.len());
    if n == 0 {
        return Vec::new();
    }
    rng.sample_indices(contacts.len(), n)
        .into_iter()
        .filter_map(|idx| contacts.get_index(idx).map(|(&id, _)| id))
        .collect()
}
