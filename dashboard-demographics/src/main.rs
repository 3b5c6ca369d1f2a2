//! World Demographics Explorer
//!
//! Three linked D3.js views over one shared selection: a rank-scatter of
//! all countries for the active year, a value histogram splitting each bin
//! into all/selected counts, and a choropleth colored for the selected
//! countries only. Clicking or brushing the scatter and clicking map
//! features mutate the selection; every view re-renders from the same
//! snapshot in one pass.
//!
//! Data flow:
//! 1. `build.rs` filters each dataset CSV down to coded country rows at
//!    compile time.
//! 2. `include_str!` embeds the CSVs and world GeoJSON into the WASM binary.
//! 3. On metric change: normalize rows via the metric's column map and
//!    build the per-year index.
//! 4. On any selection/year change: rebuild the view models in Rust and
//!    hand serialized frames to D3.js.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use wde_chart_ui::components::{
    ChartContainer, ChartHeader, CountrySelector, ErrorDisplay, LoadingSpinner, MetricSelector,
    SummaryBar, YearControls,
};
use wde_chart_ui::js_bridge;
use wde_chart_ui::playback::PlaybackTimer;
use wde_chart_ui::state::AppState;
use wde_data::choropleth::FeatureSeries;
use wde_data::scatter::{BrushOutcome, ScatterFrame};
use wde_data::{histogram, palette, YearIndex};
use wde_model::{geo, observation, Metric};

// Embed the build-filtered datasets at compile time.
const MEDIAN_AGE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/median-age.csv"));
const POPULATION_GROWTH_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/population-growth-rates.csv"));
const POPULATION_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/population-with-un-projections.csv"));
const LIFE_EXPECTANCY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/life-expectancy.csv"));
const WORLD_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/worldgeo.json"));

/// DOM ids for the D3 chart container divs.
const SCATTER_CONTAINER_ID: &str = "rank-scatter-chart";
const HISTOGRAM_CONTAINER_ID: &str = "value-histogram-chart";
const MAP_CONTAINER_ID: &str = "choropleth-map";

// Scatter pixel space. The JS renderer uses the same fixed size and
// margins (60 left, 20 right, 20 top, 40 bottom), so gesture coordinates
// arrive in the space the point positions were computed in.
const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 420;
const SCATTER_INNER_W: f64 = (CHART_WIDTH - 80) as f64;
const SCATTER_INNER_H: f64 = (CHART_HEIGHT - 60) as f64;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("demographics-root"))
        .launch(App);
}

fn csv_for(metric: Metric) -> &'static str {
    match metric {
        Metric::MedianAge => MEDIAN_AGE_CSV,
        Metric::PopulationGrowth => POPULATION_GROWTH_CSV,
        Metric::Population => POPULATION_CSV,
        Metric::LifeExpectancy => LIFE_EXPECTANCY_CSV,
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    // Per-selection choropleth series, retained across year changes.
    let mut feature_series: Signal<FeatureSeries> = use_signal(FeatureSeries::default);
    let mut timer: Signal<PlaybackTimer> = use_signal(PlaybackTimer::new);

    // ─── Effect 1: one-time setup (chart scripts, geo, gesture hooks) ───
    use_effect(move || {
        js_bridge::init_charts();

        match geo::load_feature_collection(WORLD_GEOJSON) {
            Ok(doc) => js_bridge::init_choropleth(MAP_CONTAINER_ID, &doc.to_string()),
            Err(err) => {
                log::error!("failed to load world GeoJSON: {err}");
                state.error_msg.set(Some(format!("World map: {err}")));
            }
        }

        // Hooks read the signals at gesture time, so they stay valid
        // across metric switches.
        js_bridge::install_gesture_hooks(
            move |x0, y0, x1, y1| {
                let Some(index) = state.index.read().clone() else {
                    return;
                };
                let snapshot = state.selection.read().clone();
                let frame =
                    ScatterFrame::build(&index, &snapshot, SCATTER_INNER_W, SCATTER_INNER_H);
                match frame.end_brush(x0, y0, x1, y1) {
                    BrushOutcome::Toggle(code) => {
                        state.selection.with_mut(|sel| sel.toggle(&code));
                    }
                    BrushOutcome::Replace(codes) => {
                        state.selection.with_mut(|sel| sel.set_selection(codes));
                    }
                    BrushOutcome::NoChange => {}
                }
            },
            move |code: String| {
                state.selection.with_mut(|sel| sel.toggle(&code));
            },
        );
    });

    // ─── Effect 2: load the dataset whenever the metric changes ───
    use_effect(move || {
        let metric = (state.metric)();

        // A metric switch stops playback; the stale interval must not
        // keep advancing the new dataset.
        state.playing.set(false);

        let built = observation::normalize_csv(csv_for(metric), &metric.column_map())
            .and_then(|observations| YearIndex::build(observations, metric.id()));

        match built {
            Ok(index) => {
                let year_count = index.year_count();
                // Selection survives the switch; the year position is
                // clamped into the new dataset's range.
                state
                    .selection
                    .with_mut(|sel| sel.set_year_position(sel.year_pos(), year_count));
                state.index.set(Some(index));
                state.error_msg.set(None);
            }
            Err(err) => {
                log::error!("dataset load failed for {}: {err}", metric.id());
                state.index.set(None);
                state.error_msg.set(Some(err.to_string()));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 3: atomic render pass over all three views ───
    // Re-runs whenever the index, selection, or metric change; each view
    // renders from the same selection snapshot.
    use_effect(move || {
        let Some(index) = state.index.read().clone() else {
            return;
        };
        let selection = state.selection.read().clone();
        let metric = (state.metric)();

        let year = index.year_at(selection.year_pos());
        let colors = palette::ordinal_palette(selection.selected().iter());

        // Rank-scatter
        let frame = ScatterFrame::build(&index, &selection, SCATTER_INNER_W, SCATTER_INNER_H);
        let scatter_data = serde_json::json!({
            "xDomain": [frame.x.domain().0, frame.x.domain().1],
            "yDomain": [frame.y.domain().0, frame.y.domain().1],
            "points": frame.points,
        });
        let scatter_config = serde_json::json!({
            "width": CHART_WIDTH,
            "height": CHART_HEIGHT,
            "yLabel": metric.legend_title(),
            "colors": colors,
        });
        js_bridge::render_rank_scatter(
            SCATTER_CONTAINER_ID,
            &scatter_data.to_string(),
            &scatter_config.to_string(),
        );

        // Value-histogram
        let bins = histogram::bin_year(&index, &selection);
        let hist_data = serde_json::json!({ "year": year, "bins": bins });
        let hist_config = serde_json::json!({
            "height": 430,
            "yLabel": metric.legend_title(),
        });
        js_bridge::render_value_histogram(
            HISTOGRAM_CONTAINER_ID,
            &hist_data.to_string(),
            &hist_config.to_string(),
        );

        // Choropleth: series are kept only for selected codes and carried
        // over unchanged for codes that stay selected.
        let (fills, values, extent) = feature_series.with_mut(|series| {
            series.rebind(&index, &selection);
            let fills = series.fill_colors(year);
            let values: BTreeMap<String, f64> = selection
                .selected()
                .iter()
                .filter_map(|code| series.value_for(code, year).map(|v| (code.clone(), v)))
                .collect();
            (fills, values, series.extent_for_year(year))
        });
        let map_data = serde_json::json!({
            "year": year,
            "fills": fills,
            "values": values,
            "extent": extent.map(|(lo, hi)| vec![lo, hi]),
        });
        let map_config = serde_json::json!({ "legendTitle": metric.legend_title() });
        js_bridge::render_choropleth(
            MAP_CONTAINER_ID,
            &map_data.to_string(),
            &map_config.to_string(),
        );
    });

    // ─── Effect 4: playback timer follows the playing signal ───
    use_effect(move || {
        let playing = (state.playing)();
        if playing {
            timer.with_mut(|t| {
                t.start(move || {
                    let Some(year_count) = state.index.read().as_ref().map(YearIndex::year_count)
                    else {
                        return;
                    };
                    state
                        .selection
                        .with_mut(|sel| sel.advance_year_position(year_count));
                });
            });
        } else {
            timer.with_mut(|t| t.stop());
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1280px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 8px 0;",
                "World Demographics Explorer"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                MetricSelector {}
                SummaryBar {}
                YearControls {}

                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",

                    div {
                        style: "flex: 1; min-width: 0;",

                        ChartHeader {
                            title: "Countries ranked by value".to_string(),
                            unit_description: (state.metric)().legend_title().to_string(),
                        }
                        ChartContainer {
                            id: SCATTER_CONTAINER_ID.to_string(),
                            min_height: CHART_HEIGHT,
                        }
                        p {
                            style: "font-size: 11px; color: #888; margin: 2px 0 12px 0;",
                            "Click a point to toggle a country; drag to replace the selection."
                        }

                        ChartHeader {
                            title: "Value distribution".to_string(),
                        }
                        ChartContainer {
                            id: HISTOGRAM_CONTAINER_ID.to_string(),
                            min_height: 430,
                        }

                        ChartHeader {
                            title: "World map (selected countries)".to_string(),
                        }
                        ChartContainer {
                            id: MAP_CONTAINER_ID.to_string(),
                            min_height: 480,
                        }
                    }

                    div {
                        style: "width: 260px; flex-shrink: 0;",
                        h4 {
                            style: "margin: 0 0 8px 0;",
                            "Countries"
                        }
                        CountrySelector {}
                    }
                }
            }
        }
    }
}
