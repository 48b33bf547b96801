//! `epi-net` — contact-network data model and synthesis for the epi-graph
//! framework.
//!
//! # What lives here
//!
//! | Module           | Contents                                            |
//! |------------------|-----------------------------------------------------|
//! | [`individual`]   | `Individual` — one node with owned adjacency        |
//! | [`network`]      | `Network` — population, partition, active set       |
//! | [`partition`]    | `CategoricalDistribution`                           |
//! | [`degree`]       | `DegreeTarget`, `DegreeSpec`                        |
//! | [`friendship`]   | `FriendshipTable`                                   |
//! | [`builder`]      | `NetworkBuilder` — partitioned rejection sampling   |
//! | [`intervention`] | randomized and cross-category edge deletion         |
//! | [`error`]        | `NetError`, `NetResult`                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::{Category, SimRng};
//! use epi_net::{CategoricalDistribution, DegreeSpec, FriendshipTable, NetworkBuilder};
//!
//! let mut rng = SimRng::new(42);
//! let categories: Vec<Category> =
//!     ["SCI,1", "SCI,2", "HUM,1", "HUM,2"].map(Category::single).into();
//! let network = NetworkBuilder::new(500)
//!     .distribution(CategoricalDistribution::from_pairs(
//!         categories.iter().cloned().map(|c| (c, 0.25)),
//!     )?)
//!     .degrees(DegreeSpec::poisson(5.0))
//!     .friendships(FriendshipTable::uniform(&categories, 0.6))
//!     .build(&mut rng)?;
//! ```

pub mod builder;
pub mod degree;
pub mod error;
pub mod friendship;
pub mod individual;
pub mod intervention;
pub mod network;
pub mod partition;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::NetworkBuilder;
pub use degree::{DegreeSpec, DegreeTarget};
pub use error::{NetError, NetResult};
pub use friendship::FriendshipTable;
pub use individual::Individual;
pub use intervention::{remove_cross_category_edges, remove_random_edges};
pub use network::Network;
pub use partition::CategoricalDistribution;
