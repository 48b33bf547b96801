//! Composite category keys for partitioning a population.
//!
//! A category is an ordered list of attribute parts (e.g. `["SCI", "1"]` for
//! faculty SCI, year 1) compared structurally, so lookups in degree tables
//! and friendship tables never depend on string formatting.  The
//! comma-joined `Display` form exists only for external representations.

use std::fmt;

/// An individual's immutable group label.
///
/// Equality, hashing, and ordering are structural over the parts, which
/// makes `Category` usable as a map key everywhere a partition, degree
/// target, or friendship probability is indexed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category(Vec<String>);

impl Category {
    /// Build a category from its attribute parts, in order.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Category(parts.into_iter().map(Into::into).collect())
    }

    /// Build a single-attribute category.
    pub fn single(part: impl Into<String>) -> Self {
        Category(vec![part.into()])
    }

    /// The attribute parts, in declaration order.
    #[inline]
    pub fn parts(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Category {
    /// Comma-joined wire form, e.g. `SCI,1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}
