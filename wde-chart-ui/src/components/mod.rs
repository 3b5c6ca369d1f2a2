//! Reusable Dioxus RSX components for the demographics dashboard.

mod chart_container;
mod chart_header;
mod country_selector;
mod error_display;
mod loading_spinner;
mod metric_selector;
mod summary_bar;
mod year_controls;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use country_selector::CountrySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use summary_bar::SummaryBar;
pub use year_controls::YearControls;
