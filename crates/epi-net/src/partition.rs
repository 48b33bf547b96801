//! Categorical distribution used to partition the population.

use epi_core::{Category, SimRng};

use crate::{NetError, NetResult};

/// Tolerance for the sum-to-one check.
const SUM_TOLERANCE: f64 = 1e-9;

/// A validated mapping from category to probability, in declared order.
///
/// Sampling maps one uniform draw onto the cumulative distribution with
/// **lower-inclusive** intervals `[acc, acc + p)`, so a draw of exactly 0.0
/// lands in the first positive-probability category.  Zero-probability
/// categories are valid declarations but are never selected; a
/// floating-point tail spill (the draw landing past the accumulated sum)
/// selects the last positive-probability category.
#[derive(Clone, Debug)]
pub struct CategoricalDistribution {
    entries:  Vec<(Category, f64)>,
    /// Index of the last positive-probability entry; tail-spill target.
    fallback: usize,
}

impl CategoricalDistribution {
    /// Validate and build a distribution from `(category, probability)`
    /// entries in declared order.
    ///
    /// Fails if the entries are empty, a category repeats, any probability
    /// is negative or non-finite, or the probabilities do not sum to 1
    /// within `1e-9`.
    pub fn new(entries: Vec<(Category, f64)>) -> NetResult<Self> {
        if entries.is_empty() {
            return Err(NetError::Config(
                "categorical distribution needs at least one category".to_string(),
            ));
        }
        for i in 0..entries.len() {
            for j in i + 1..entries.len() {
                if entries[i].0 == entries[j].0 {
                    return Err(NetError::Config(format!(
                        "duplicate category {} in distribution",
                        entries[i].0
                    )));
                }
            }
        }

        let mut total = 0.0;
        let mut fallback = None;
        for (i, (category, p)) in entries.iter().enumerate() {
            if !p.is_finite() || *p < 0.0 {
                return Err(NetError::Config(format!(
                    "probability {p} for category {category} is not in [0, 1]"
                )));
            }
            if *p > 0.0 {
                fallback = Some(i);
            }
            total += p;
        }
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(NetError::DistributionSum { got: total });
        }
        // total ≈ 1 guarantees at least one positive entry.
        let fallback = fallback.unwrap_or(0);

        Ok(CategoricalDistribution { entries, fallback })
    }

    /// Convenience constructor from any iterator of pairs.
    pub fn from_pairs<I>(pairs: I) -> NetResult<Self>
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        Self::new(pairs.into_iter().collect())
    }

    /// Draw one category according to the distribution.
    pub fn sample(&self, rng: &mut SimRng) -> &Category {
        let u = rng.uniform();
        let mut acc = 0.0;
        for (category, p) in &self.entries {
            acc += p;
            if *p > 0.0 && u < acc {
                return category;
            }
        }
        &self.entries[self.fallback].0
    }

    /// Declared `(category, probability)` entries, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, f64)> {
        self.entries.iter().map(|(c, p)| (c, *p))
    }

    /// Whether `category` is declared (including with probability 0).
    pub fn contains(&self, category: &Category) -> bool {
        self.entries.iter().any(|(c, _)| c == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
