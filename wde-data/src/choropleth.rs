//! Choropleth adapter: per-feature time series are materialized only for
//! selected codes, keeping map memory proportional to
//! `|selected| x |years|` rather than every country on the planet.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::palette;
use crate::selection::SelectionState;
use crate::year_index::YearIndex;

/// The actual/projected pair attached to one feature for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearValue {
    pub actual: Option<f64>,
    pub projected: Option<f64>,
}

impl YearValue {
    /// Same actual-then-projected fallback as the observation model.
    pub fn resolved(&self) -> Option<f64> {
        self.actual.or(self.projected)
    }
}

/// Per-year value maps keyed by country code, held only for the current
/// selection. Rebuilt incrementally on every selection change.
#[derive(Debug, Clone, Default)]
pub struct FeatureSeries {
    series: HashMap<String, BTreeMap<i32, YearValue>>,
}

impl FeatureSeries {
    /// Bring the retained series in line with the selection: series for
    /// deselected codes are dropped, newly selected codes get a fresh
    /// per-year map built from the index, and codes selected across the
    /// transition keep their existing map untouched.
    pub fn rebind(&mut self, index: &YearIndex, selection: &SelectionState) {
        self.series
            .retain(|code, _| selection.is_selected(code));

        for code in selection.selected() {
            if self.series.contains_key(code) {
                continue;
            }
            let mut per_year = BTreeMap::new();
            for &year in index.years() {
                if let Some(obs) = index
                    .rows_for(year)
                    .iter()
                    .find(|o| o.code.eq_ignore_ascii_case(code))
                {
                    per_year.insert(
                        year,
                        YearValue {
                            actual: obs.actual,
                            projected: obs.projected,
                        },
                    );
                }
            }
            self.series.insert(code.clone(), per_year);
        }
    }

    pub fn series_for(&self, code: &str) -> Option<&BTreeMap<i32, YearValue>> {
        self.series.get(code)
    }

    /// Resolved value for a feature in a year; `None` means no-data fill.
    pub fn value_for(&self, code: &str, year: i32) -> Option<f64> {
        self.series.get(code)?.get(&year)?.resolved()
    }

    /// (min, max) of the resolved values present for the given year.
    pub fn extent_for_year(&self, year: i32) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for per_year in self.series.values() {
            if let Some(value) = per_year.get(&year).and_then(YearValue::resolved) {
                extent = Some(match extent {
                    Some((lo, hi)) => (lo.min(value), hi.max(value)),
                    None => (value, value),
                });
            }
        }
        extent
    }

    /// Fill color per code for the given year, interpolated over the
    /// year's extent. Codes without a value are absent (no-data fill).
    pub fn fill_colors(&self, year: i32) -> BTreeMap<String, String> {
        let mut fills = BTreeMap::new();
        let Some((lo, hi)) = self.extent_for_year(year) else {
            return fills;
        };
        for code in self.series.keys() {
            if let Some(value) = self.value_for(code, year) {
                let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
                fills.insert(code.clone(), palette::map_fill(t));
            }
        }
        fills
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
