//! `epi-core` — foundational types for the epi-graph framework.
//!
//! This crate is a dependency of every other `epi-*` crate.  It
//! intentionally has no `epi-*` dependencies and minimal external ones
//! (only `rand`/`rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`ids`]      | `PersonId`                                       |
//! | [`category`] | `Category` composite partition keys              |
//! | [`state`]    | `StateId`, `StateSet`                            |
//! | [`rng`]      | `SimRng` — the injected deterministic stream     |
//! | [`error`]    | `EpiError`, `EpiResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod category;
pub mod error;
pub mod ids;
pub mod rng;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::Category;
pub use error::{EpiError, EpiResult};
pub use ids::PersonId;
pub use rng::SimRng;
pub use state::{StateId, StateSet};
