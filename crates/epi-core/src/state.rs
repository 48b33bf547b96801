//! Ordered epidemic states.
//!
//! The engine recognizes three fixed roles by position: slot 0 is the
//! susceptible/default state, slot 1 is the infectious state written by
//! introduce-infection, and slot 2 is the terminal recovered state.  An
//! application may declare further states beyond these; the engine ignores
//! them.

use crate::{EpiError, EpiResult};

/// Index of a state in a [`StateSet`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateId(pub u16);

impl StateId {
    /// The default state at creation.  Only susceptible individuals can
    /// become infectious.
    pub const SUSCEPTIBLE: StateId = StateId(0);
    /// The state written by introduce-infection and by transmission.
    pub const INFECTIOUS: StateId = StateId(1);
    /// The terminal state; never left once entered.
    pub const RECOVERED: StateId = StateId(2);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The ordered list of states a network's individuals can be in.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateSet {
    labels: Vec<String>,
}

impl StateSet {
    /// Build a state set from ordered labels.
    ///
    /// At least three labels are required so the susceptible, infectious,
    /// and recovered roles all exist.
    pub fn new(labels: Vec<String>) -> EpiResult<Self> {
        if labels.len() < 3 {
            return Err(EpiError::Config(format!(
                "state set needs at least 3 states (susceptible, infectious, recovered), got {}",
                labels.len()
            )));
        }
        Ok(StateSet { labels })
    }

    /// The conventional three-state susceptible/infectious/recovered set.
    pub fn sir() -> Self {
        StateSet {
            labels: vec![
                "susceptible".to_string(),
                "infectious".to_string(),
                "recovered".to_string(),
            ],
        }
    }

    /// The label for a state, or `None` if the id is out of range.
    pub fn label(&self, id: StateId) -> Option<&str> {
        self.labels.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for StateSet {
    fn default() -> Self {
        Self::sir()
    }
}
