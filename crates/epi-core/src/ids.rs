//! Strongly typed, zero-cost identifier wrapper.
//!
//! A `PersonId` is `Copy + Ord + Hash` so it can be used as a map key and a
//! sorted collection element without ceremony.  The inner integer is `pub` to
//! allow direct indexing into the network's individual vector via
//! `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Index of an individual in the network's storage.  Max ~4.3 billion people.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u32);

impl PersonId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: PersonId = PersonId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for PersonId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl From<PersonId> for usize {
    #[inline(always)]
    fn from(id: PersonId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PersonId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PersonId, Self::Error> {
        u32::try_from(n).map(PersonId)
    }
}
