//! Year navigation: numeric input, range slider, and playback toggle.

use crate::state::AppState;
use dioxus::prelude::*;

/// Controls for the active year position.
///
/// The numeric input snaps to the nearest indexed year, so typing 1999
/// into a decade-spaced dataset lands on an existing year rather than an
/// empty frame. The play button only flips the `playing` signal; the app
/// owns the interval timer and reacts to the flip.
#[component]
pub fn YearControls() -> Element {
    let mut state = use_context::<AppState>();

    let Some(index) = state.index.read().clone() else {
        return rsx! {
            div {}
        };
    };

    let year_count = index.year_count();
    let selection = state.selection.read().clone();
    let pos = selection.year_pos();
    let current_year = index.year_at(pos);
    let playing = (state.playing)();

    let first_year = index.year_at(0);
    let last_year = index.year_at(year_count.saturating_sub(1));

    let snap_index = index.clone();
    let on_year_input = move |evt: Event<FormData>| {
        if let Ok(target) = evt.value().parse::<i32>() {
            let snapped = snap_index.nearest_year_position(target);
            state
                .selection
                .with_mut(|sel| sel.set_year_position(snapped, year_count));
        }
    };

    let on_slider = move |evt: Event<FormData>| {
        if let Ok(p) = evt.value().parse::<usize>() {
            state
                .selection
                .with_mut(|sel| sel.set_year_position(p, year_count));
        }
    };

    let on_play = move |_| {
        let now_playing = (state.playing)();
        state.playing.set(!now_playing);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Year: "
                input {
                    r#type: "number",
                    value: "{current_year}",
                    min: "{first_year}",
                    max: "{last_year}",
                    style: "width: 80px;",
                    onchange: on_year_input,
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "{year_count.saturating_sub(1)}",
                value: "{pos}",
                style: "flex: 1;",
                oninput: on_slider,
            }
            button {
                style: "padding: 4px 14px;",
                onclick: on_play,
                if playing { "Pause" } else { "Play" }
            }
        }
    }
}
