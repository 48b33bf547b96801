//! Degree targets for partitioned synthesis.
//!
//! A target is advisory, not exact: the synthesis loop stops *initiating*
//! edges for an individual once its realized degree reaches the target for
//! its category, but edges placed via the other endpoint are never
//! retracted.

use std::fmt;
use std::sync::Arc;

use epi_core::{Category, SimRng};
use indexmap::IndexMap;

use crate::{NetError, NetResult};

/// How many contacts an individual of some category should aim for.
#[derive(Clone)]
pub enum DegreeTarget {
    /// A fixed count.  Consumes no random draw when realized.
    Fixed(u32),
    /// A Poisson draw with the given mean, realized fresh on every call.
    Poisson(f64),
    /// A caller-supplied sampler, realized fresh on every call.
    Custom(Arc<dyn Fn(&mut SimRng) -> u32 + Send + Sync>),
}

impl DegreeTarget {
    /// Realize the target: fixed values pass through, random targets draw.
    pub fn realize(&self, rng: &mut SimRng) -> u32 {
        match self {
            DegreeTarget::Fixed(n) => *n,
            DegreeTarget::Poisson(mean) => rng.poisson(*mean) as u32,
            DegreeTarget::Custom(sampler) => sampler(rng),
        }
    }

    /// Reject non-finite or negative Poisson means.
    pub(crate) fn validate(&self) -> NetResult<()> {
        if let DegreeTarget::Poisson(mean) = self {
            if !mean.is_finite() || *mean < 0.0 {
                return Err(NetError::Config(format!(
                    "Poisson degree mean {mean} must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DegreeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeTarget::Fixed(n) => write!(f, "Fixed({n})"),
            DegreeTarget::Poisson(mean) => write!(f, "Poisson({mean})"),
            DegreeTarget::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Degree targets for the whole population: one target for everybody, or
/// one per category.
#[derive(Clone, Debug)]
pub enum DegreeSpec {
    /// The same target applies to every category.
    Uniform(DegreeTarget),
    /// Per-category targets; every declared category must have an entry.
    PerCategory(IndexMap<Category, DegreeTarget>),
}

impl DegreeSpec {
    /// Shorthand for a uniform fixed target.
    pub fn fixed(n: u32) -> Self {
        DegreeSpec::Uniform(DegreeTarget::Fixed(n))
    }

    /// Shorthand for a uniform Poisson target.
    pub fn poisson(mean: f64) -> Self {
        DegreeSpec::Uniform(DegreeTarget::Poisson(mean))
    }

    /// The target for `category`, or [`NetError::MissingDegree`] when a
    /// per-category table has no entry for it.
    pub fn target_for(&self, category: &Category) -> NetResult<&DegreeTarget> {
        match self {
            DegreeSpec::Uniform(target) => Ok(target),
            DegreeSpec::PerCategory(table) => table
                .get(category)
                .ok_or_else(|| NetError::MissingDegree(category.clone())),
        }
    }
}
