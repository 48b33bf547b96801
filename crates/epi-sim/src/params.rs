//! Epidemic run parameters.

use crate::{SimError, SimResult};

/// Parameters governing one epidemic run.
///
/// Validated by [`Epidemic::new`][crate::Epidemic::new]; constructing the
/// struct directly with out-of-range values is caught there.
#[derive(Debug, Clone, PartialEq)]
pub struct EpidemicParams {
    /// Per-day, per-contact transmission probability in `[0, 1]`.
    ///
    /// The effective infection probability for one contact is this rate
    /// multiplied by the edge weight.
    pub transmission_rate: f64,

    /// Mean of the Poisson recovery threshold, in days.
    ///
    /// Each active day an infectious person draws
    /// `Poisson(recovery_days) + Uniform{0..=4}` and recovers once the days
    /// already spent infectious exceed the draw.
    pub recovery_days: f64,

    /// When `true` (the default), infections contracted on days whose
    /// 0-based index is a multiple of 5 or 6 are parked in a backlog and
    /// only start transmitting the next non-deferred day.
    pub staggered_activation: bool,

    /// Abort the run once the active infectious count exceeds this value.
    /// `None` disables the check.
    pub infection_ceiling: Option<usize>,
}

impl EpidemicParams {
    /// Parameters with the default activation policy and no ceiling.
    pub fn new(transmission_rate: f64, recovery_days: f64) -> Self {
        EpidemicParams {
            transmission_rate,
            recovery_days,
            staggered_activation: true,
            infection_ceiling: None,
        }
    }

    /// Check all fields, returning the first violation found.
    pub fn validate(&self) -> SimResult<()> {
        if !(0.0..=1.0).contains(&self.transmission_rate) {
            return Err(SimError::Config(format!(
                "transmission_rate must be in [0, 1], got {}",
                self.transmission_rate
            )));
        }
        if !self.recovery_days.is_finite() || self.recovery_days < 0.0 {
            return Err(SimError::Config(format!(
                "recovery_days must be a finite non-negative number, got {}",
                self.recovery_days
            )));
        }
        Ok(())
    }
}
