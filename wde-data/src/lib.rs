//! Derived data structures and view models for the demographic dashboard.
//!
//! This crate is pure computation: observations go in, per-year indices and
//! renderable frames (ranked scatter points, histogram bins, choropleth
//! series) come out. Nothing here touches the DOM; the chart-ui crate
//! serializes these view models for the D3 bridge.

pub mod choropleth;
pub mod histogram;
pub mod palette;
pub mod scale;
pub mod scatter;
pub mod selection;
pub mod summary;
pub mod year_index;

pub use selection::SelectionState;
pub use year_index::YearIndex;
