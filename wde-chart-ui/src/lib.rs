//! Shared Dioxus components and D3.js bridge for the demographics dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`,
//!   plus the JS -> Rust gesture hooks (brush end, map click)
//! - `state`: Reactive AppState with Dioxus Signals
//! - `playback`: uniquely-owned cancellable year-animation timer
//! - `components`: Reusable RSX components (country selector, year controls,
//!   containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod playback;
pub mod state;
