//! One node in the contact graph.

use epi_core::{Category, PersonId, StateId};
use indexmap::IndexMap;

/// Default weight for a contact added without an explicit strength.
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// A member of the population: identity, category, epidemic state, and an
/// owned adjacency map.
///
/// Identity (`id`, `category`) is immutable after synthesis; `state`,
/// `days_in_state`, and `contacts` mutate over a simulation's lifetime.
/// Each individual owns a freshly allocated contact map, so cloning a
/// network clones every adjacency independently.
#[derive(Clone, Debug)]
pub struct Individual {
    pub id:       PersonId,
    pub category: Category,

    /// Current epidemic state; starts at [`StateId::SUSCEPTIBLE`].
    pub state: StateId,

    /// Days spent in the current state.  Reset to 0 on entering the
    /// infectious state; advanced once per simulated day while infectious.
    pub days_in_state: u32,

    /// Neighbor id → contact weight.  Insertion order is the iteration
    /// order, which the day loop's draw sequence depends on.
    pub contacts: IndexMap<PersonId, f32>,
}

impl Individual {
    /// Create an individual with no contacts.
    pub fn new(id: PersonId, category: Category, state: StateId) -> Self {
        Individual {
            id,
            category,
            state,
            days_in_state: 0,
            contacts: IndexMap::new(),
        }
    }

    /// Record a contact to `other` with the given weight.
    ///
    /// Map semantics de-duplicate: inserting an existing neighbor keeps one
    /// entry and overwrites its weight.
    #[inline]
    pub fn add_contact(&mut self, other: PersonId, weight: f32) {
        self.contacts.insert(other, weight);
    }

    /// Remove the contact to `other`, preserving the insertion order of the
    /// remaining entries.  Returns `true` if the contact existed.
    #[inline]
    pub fn remove_contact(&mut self, other: PersonId) -> bool {
        self.contacts.shift_remove(&other).is_some()
    }

    /// Number of stored contacts.
    #[inline]
    pub fn degree(&self) -> usize {
        self.contacts.len()
    }
}
