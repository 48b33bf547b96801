//! Run observer trait for progress reporting and curve collection.

use crate::StopReason;

/// Callbacks invoked by [`Epidemic::run_days`][crate::Epidemic::run_days] at
/// day boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Day numbers are 1-based: the first
/// simulated day reports as day 1.
///
/// # Example — console progress
///
/// ```rust,ignore
/// struct Progress;
///
/// impl RunObserver for Progress {
///     fn on_day_end(&mut self, day: u32, infectious: usize) {
///         println!("day {day}: {infectious} infectious");
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called before each day is processed.
    fn on_day_start(&mut self, _day: u32) {}

    /// Called after each day completes.
    ///
    /// `infectious` is the number of actively infectious people at the end
    /// of the day (backlogged infections are excluded until activated).
    fn on_day_end(&mut self, _day: u32, _infectious: usize) {}

    /// Called once when the run loop stops, whether it completed its span
    /// or hit the infection ceiling.
    fn on_run_end(&mut self, _final_day: u32, _reason: StopReason) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call
/// `run_days` but don't want callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

// ── Curve collection ──────────────────────────────────────────────────────────

/// One point on an epidemic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount {
    /// 1-based day number.
    pub day: u32,
    /// Actively infectious people at the end of that day.
    pub infectious: usize,
}

/// A [`RunObserver`] that records the infectious count after every day.
#[derive(Debug, Default)]
pub struct CurveRecorder {
    /// Collected points in day order.
    pub series: Vec<DayCount>,
}

impl CurveRecorder {
    pub fn new() -> Self {
        CurveRecorder::default()
    }
}

impl RunObserver for CurveRecorder {
    fn on_day_end(&mut self, day: u32, infectious: usize) {
        self.series.push(DayCount { day, infectious });
    }
}
