//! Year playback: advance the active year on a fixed interval.
//!
//! The timer is a uniquely-owned handle. `start` while already running is a
//! no-op, so two overlapping intervals cannot exist; `stop` (or dropping the
//! handle, e.g. during a metric switch) clears the interval so no further
//! tick fires.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Milliseconds between year advances.
pub const TICK_MS: i32 = 700;

pub struct PlaybackTimer {
    interval_id: Option<i32>,
    // Keeps the JS-side callback alive for the lifetime of the interval.
    tick: Option<Closure<dyn FnMut()>>,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self {
            interval_id: None,
            tick: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval_id.is_some()
    }

    /// Begin firing `on_tick` every [`TICK_MS`]. No-op when already running.
    pub fn start(&mut self, on_tick: impl FnMut() + 'static) {
        if self.is_running() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let tick = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            TICK_MS,
        ) {
            Ok(id) => {
                self.interval_id = Some(id);
                self.tick = Some(tick);
            }
            Err(err) => log::warn!("failed to start playback interval: {err:?}"),
        }
    }

    /// Cancel the interval. After this returns no scheduled tick fires.
    pub fn stop(&mut self) {
        if let Some(id) = self.interval_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
        self.tick = None;
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Default for PlaybackTimer {
    fn default() -> Self {
        Self::new()
    }
}
