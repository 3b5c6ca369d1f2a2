//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules), exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize view-model data and call those
//! globals, plus the reverse direction: gesture hooks the JS renderers
//! call back into (scatter brush end, map feature click) so selection
//! transitions stay in Rust.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static RANK_SCATTER_JS: &str = include_str!("../assets/js/rank-scatter.js");
static VALUE_HISTOGRAM_JS: &str = include_str!("../assets/js/value-histogram.js");
static CHOROPLETH_JS: &str = include_str!("../assets/js/choropleth-map.js");

thread_local! {
    // Gesture closures must stay alive while installed on window.
    static GESTURE_CLOSURES: RefCell<Vec<JsValue>> = const { RefCell::new(Vec::new()) };
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WDE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderRankScatter(...)` via
/// `function` declarations. They are evaluated at global scope via indirect
/// eval once D3 is ready, then promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, RANK_SCATTER_JS, VALUE_HISTOGRAM_JS, CHOROPLETH_JS].join("\n");

    let store_js = format!(
        "window.__wdeChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wdeChartScripts);
                    delete window.__wdeChartScripts;
                    if (typeof renderRankScatter !== 'undefined') window.renderRankScatter = renderRankScatter;
                    if (typeof renderValueHistogram !== 'undefined') window.renderValueHistogram = renderValueHistogram;
                    if (typeof initChoropleth !== 'undefined') window.initChoropleth = initChoropleth;
                    if (typeof renderChoropleth !== 'undefined') window.renderChoropleth = renderChoropleth;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__wdeChartsReady = true;
                    console.log('WDE charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Install the JS -> Rust gesture callbacks on `window`.
///
/// `on_scatter_gesture` receives the brush rectangle in plot pixels (a
/// zero-area rectangle is a click); `on_map_toggle` receives the resolved
/// country code of a clicked map feature. Any previously installed hooks
/// are removed first, so a dataset reload cannot leave a stale controller
/// closing over a superseded index.
pub fn install_gesture_hooks(
    on_scatter_gesture: impl FnMut(f64, f64, f64, f64) + 'static,
    on_map_toggle: impl FnMut(String) + 'static,
) {
    remove_gesture_hooks();

    let Some(window) = web_sys::window() else {
        return;
    };

    let scatter = Closure::wrap(Box::new(on_scatter_gesture) as Box<dyn FnMut(f64, f64, f64, f64)>);
    let map_toggle = Closure::wrap(Box::new(on_map_toggle) as Box<dyn FnMut(String)>);

    let _ = js_sys::Reflect::set(
        &window,
        &JsValue::from_str("__wdeScatterGesture"),
        scatter.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &window,
        &JsValue::from_str("__wdeMapToggle"),
        map_toggle.as_ref().unchecked_ref(),
    );

    GESTURE_CLOSURES.with(|cell| {
        let mut closures = cell.borrow_mut();
        closures.push(scatter.into_js_value());
        closures.push(map_toggle.into_js_value());
    });
}

/// Detach the gesture callbacks. JS renderers treat a missing hook as
/// "ignore the gesture".
pub fn remove_gesture_hooks() {
    if let Some(window) = web_sys::window() {
        for name in ["__wdeScatterGesture", "__wdeMapToggle"] {
            let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(name));
        }
    }
    GESTURE_CLOSURES.with(|cell| cell.borrow_mut().clear());
}

/// Render the rank-scatter view.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_rank_scatter(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderRankScatter", container_id, data_json, config_json);
}

/// Render the value-histogram view.
pub fn render_value_histogram(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderValueHistogram", container_id, data_json, config_json);
}

/// Hand the annotated GeoJSON to the map renderer. Called once per geo
/// load; per-pass updates go through [`render_choropleth`].
pub fn init_choropleth(container_id: &str, geojson: &str) {
    render_when_ready("initChoropleth", container_id, geojson, "{}");
}

/// Recolor the map for the current year/selection.
pub fn render_choropleth(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderChoropleth", container_id, data_json, config_json);
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wdeChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[WDE] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
