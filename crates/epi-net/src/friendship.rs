//! Pairwise category friendship probabilities.

use epi_core::Category;
use rustc_hash::FxHashMap;

/// Mapping from an ordered category pair to the probability that a candidate
/// pair in those categories becomes an edge.
///
/// Lookups try the ordered pair first; on a symmetric network the reversed
/// pair is consulted as a fallback, so each unordered pair only needs one
/// entry.  Probabilities are validated to `[0, 1]` when the table is handed
/// to a builder, not at insertion.
#[derive(Clone, Debug, Default)]
pub struct FriendshipTable {
    /// First category → second category → probability.
    probs: FxHashMap<Category, FxHashMap<Category, f64>>,
}

impl FriendshipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probability for the ordered pair `(a, b)`.
    pub fn insert(&mut self, a: Category, b: Category, p: f64) {
        self.probs.entry(a).or_default().insert(b, p);
    }

    /// A table assigning `p` to every unordered pair over `categories`
    /// (self-pairs included).
    pub fn uniform(categories: &[Category], p: f64) -> Self {
        let mut table = Self::new();
        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i..] {
                table.insert(a.clone(), b.clone(), p);
            }
        }
        table
    }

    /// The probability for `(a, b)`: the ordered pair if present, else the
    /// reversed pair when `symmetric`, else `None`.
    pub fn lookup(&self, a: &Category, b: &Category, symmetric: bool) -> Option<f64> {
        if let Some(&p) = self.probs.get(a).and_then(|row| row.get(b)) {
            return Some(p);
        }
        if symmetric {
            return self.probs.get(b).and_then(|row| row.get(a)).copied();
        }
        None
    }

    /// All `(first, second, probability)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &Category, f64)> {
        self.probs
            .iter()
            .flat_map(|(a, row)| row.iter().map(move |(b, &p)| (a, b, p)))
    }

    /// Number of ordered pairs with a declared probability.
    pub fn len(&self) -> usize {
        self.probs.values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }
}
