//! `epi-sim` — day loop engine for the epi-graph framework.
//!
//! # Three-phase day loop
//!
//! ```text
//! for each day:
//!   ① Transmission — each active infectious person offers infection to
//!                    every susceptible contact with probability
//!                    transmission_rate × edge weight.
//!   ② Recovery     — the person recovers once their days infectious
//!                    exceed Poisson(recovery_days) + Uniform{0..=4},
//!                    redrawn at every check.
//!   ③ Activation   — today's infections join the active set, unless the
//!                    0-based day index divides by 5 or 6, in which case
//!                    they wait in the backlog.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs scenario branches on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::SimRng;
//! use epi_sim::{Epidemic, EpidemicParams, NoopObserver};
//!
//! let mut epidemic = Epidemic::new(network, EpidemicParams::new(0.1, 4.0), SimRng::new(42))?;
//! epidemic.introduce_infection();
//! let (curve, reason) = epidemic.run_collect(120);
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod params;
pub mod scenario;


pub use engine::{Epidemic, StopReason};
pub use error::{SimError, SimResult};
pub use observer::{CurveRecorder, DayCount, NoopObserver, RunObserver};
pub use params::EpidemicParams;
pub use scenario::run_branches;
