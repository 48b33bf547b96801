//! `epi-output` — export renderers for the epi-graph framework.
//!
//! Two export surfaces are provided:
//!
//! | Export                        | Shape                                        |
//! |-------------------------------|----------------------------------------------|
//! | [`edge_list_csv`]             | `source,target,strength,class,state` rows    |
//! | [`curve_csv`]                 | `time,num_infected` rows                     |
//! | [`GraphExport`]               | Serde-serializable `{ nodes, links }` struct |
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{curve_csv, edge_list_csv};
//!
//! let (series, _) = epidemic.run_collect(120);
//! std::fs::write("edges.csv", edge_list_csv(&epidemic.network)?)?;
//! std::fs::write("curve.csv", curve_csv(&series)?)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;


pub use csv::{curve_csv, edge_list_csv};
pub use error::{ExportError, ExportResult};
pub use row::{GraphExport, LinkRow, NodeRow};
