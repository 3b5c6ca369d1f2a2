//! Country selection list with search and bulk actions.

use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox list over the dataset's country directory.
///
/// The list is filtered by the search signal (case-insensitive match on
/// name or code). "Select all" excludes world-level aggregate rows;
/// "Clear all" empties the selection, which is a valid state that renders
/// every view in its unselected form.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let search = (state.search)().to_lowercase();

    let Some(index) = state.index.read().clone() else {
        return rsx! {
            div {
                style: "color: #666; font-size: 13px;",
                "Country list unavailable"
            }
        };
    };

    let selection = state.selection.read().clone();
    let entries: Vec<_> = index
        .directory()
        .iter()
        .filter(|entry| {
            search.is_empty()
                || entry.entity.to_lowercase().contains(&search)
                || entry.code.to_lowercase().contains(&search)
        })
        .cloned()
        .collect();

    let directory = index.directory().to_vec();
    let on_select_all = move |_| {
        state
            .selection
            .with_mut(|sel| sel.select_all(directory.iter()));
    };
    let on_clear_all = move |_| {
        state.selection.with_mut(|sel| sel.clear_all());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            input {
                r#type: "search",
                placeholder: "Search countries...",
                value: "{(state.search)()}",
                style: "padding: 6px 8px; border: 1px solid #ccc; border-radius: 4px;",
                oninput: move |evt| state.search.set(evt.value()),
            }
            div {
                style: "display: flex; gap: 8px;",
                button {
                    style: "flex: 1; padding: 4px 8px; font-size: 12px;",
                    onclick: on_select_all,
                    "Select all"
                }
                button {
                    style: "flex: 1; padding: 4px 8px; font-size: 12px;",
                    onclick: on_clear_all,
                    "Clear all"
                }
            }
            div {
                style: "max-height: 320px; overflow-y: auto; border: 1px solid #eee; border-radius: 4px; padding: 4px;",
                for entry in entries {
                    label {
                        key: "{entry.code}",
                        style: "display: flex; align-items: center; gap: 6px; padding: 2px 4px; font-size: 13px; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: selection.is_selected(&entry.code),
                            onchange: {
                                let code = entry.code.clone();
                                move |_| state.selection.with_mut(|sel| sel.toggle(&code))
                            },
                        }
                        "{entry.entity}"
                    }
                }
            }
        }
    }
}
