//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The `selection` signal is the single source of truth for which countries
//! are highlighted and which year is active; every view renders from one
//! read of it per pass, and only gesture handlers write to it.

use dioxus::prelude::*;
use wde_data::{SelectionState, YearIndex};
use wde_model::Metric;

/// Codes highlighted when the dashboard first loads.
pub const DEFAULT_SELECTED_CODES: [&str; 3] = ["USA", "CHN", "IND"];

/// Shared application state for the demographics dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Year index for the active metric (None until loaded)
    pub index: Signal<Option<YearIndex>>,
    /// Selected country codes + active year position
    pub selection: Signal<SelectionState>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently displayed metric
    pub metric: Signal<Metric>,
    /// Country search filter text
    pub search: Signal<String>,
    /// Whether year playback is running
    pub playing: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            index: Signal::new(None),
            selection: Signal::new(SelectionState::new(DEFAULT_SELECTED_CODES)),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            metric: Signal::new(Metric::MedianAge),
            search: Signal::new(String::new()),
            playing: Signal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
