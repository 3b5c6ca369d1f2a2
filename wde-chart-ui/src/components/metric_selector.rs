//! Dropdown selector for choosing the displayed metric.

use crate::state::AppState;
use dioxus::prelude::*;
use wde_model::Metric;

/// Metric dropdown. Changing it triggers a dataset reload in the app's
/// load effect; the selection set is preserved across the switch.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.metric)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(metric) = Metric::from_id(&evt.value()) {
            state.metric.set(metric);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Metric: "
            }
            select {
                id: "metric-select",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: "{metric.id()}",
                        selected: metric == current,
                        "{metric.legend_title()}"
                    }
                }
            }
        }
    }
}
