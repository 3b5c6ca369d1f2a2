//! Core data model for the World Demographics Explorer.
//!
//! Raw CSV rows become canonical [`observation::Observation`] tuples through
//! a column-mapping configuration resolved once per dataset load. Everything
//! downstream (indexing, view models, rendering) consumes observations only.

pub mod error;
pub mod geo;
pub mod metric;
pub mod observation;

pub use error::{Result, WdeError};
pub use metric::Metric;
pub use observation::{normalize_csv, ColumnMap, Observation};
