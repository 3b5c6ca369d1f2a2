//! Summary strip: dataset-wide and selection averages.

use crate::state::AppState;
use dioxus::prelude::*;
use wde_data::summary;
use wde_utils::fmt::format_short;

/// Averages over all years for the full dataset and the selected subset.
#[component]
pub fn SummaryBar() -> Element {
    let state = use_context::<AppState>();

    let Some(index) = state.index.read().clone() else {
        return rsx! {
            div {}
        };
    };

    let selection = state.selection.read().clone();
    let total = summary::total_average(&index)
        .map(format_short)
        .unwrap_or_else(|| "n/a".to_string());
    let selected = summary::selected_average(&index, &selection)
        .map(format_short)
        .unwrap_or_else(|| "n/a".to_string());
    let selected_count = selection.selected().len();

    rsx! {
        div {
            style: "display: flex; gap: 24px; padding: 8px 12px; background: #f5f7fa; border-radius: 4px; font-size: 13px;",
            span {
                "All countries, all years: "
                strong { "{total}" }
            }
            span {
                "Selected ({selected_count}), all years: "
                strong { "{selected}" }
            }
        }
    }
}
