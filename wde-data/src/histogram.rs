//! Value-histogram view model: the active year partitioned into eight
//! equal-width bins, with total and selected-subset counts overlaid.

use serde::Serialize;
use wde_model::Observation;

use crate::selection::SelectionState;
use crate::year_index::YearIndex;

pub const BIN_COUNT: usize = 8;

/// One value-range bucket. Recomputed in full every render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub index: usize,
    pub x0: f64,
    pub x1: f64,
    pub all_count: usize,
    pub selected_count: usize,
    /// How many observations in the bin carried a measured value vs. the
    /// projected fallback, for the whole bin and the selected subset.
    pub all_actual: usize,
    pub all_projected: usize,
    pub selected_actual: usize,
    pub selected_projected: usize,
    /// Display names of selected countries in the bin, for hover detail.
    pub selected_entities: Vec<String>,
}

/// Partition the active year's observations into [`BIN_COUNT`] equal-width
/// bins over `[min, max]`. When every value is equal the width falls back
/// to 1.0; the maximum value is clamped into the last bin rather than
/// overflowing past it.
pub fn bin_year(index: &YearIndex, selection: &SelectionState) -> Vec<Bin> {
    bin_rows(index.rows_at(selection.year_pos()), selection)
}

pub fn bin_rows(rows: &[Observation], selection: &SelectionState) -> Vec<Bin> {
    let (min_v, max_v) = rows.iter().fold((f64::MAX, f64::MIN), |(lo, hi), o| {
        (lo.min(o.value), hi.max(o.value))
    });
    // Empty years keep a renderable frame over a unit extent.
    let (min_v, max_v) = if rows.is_empty() { (0.0, 1.0) } else { (min_v, max_v) };
    let range = max_v - min_v;
    let width = if range > 0.0 {
        range / BIN_COUNT as f64
    } else {
        1.0
    };

    let mut bins: Vec<Bin> = (0..BIN_COUNT)
        .map(|index| Bin {
            index,
            x0: min_v + index as f64 * width,
            x1: if index == BIN_COUNT - 1 {
                max_v
            } else {
                min_v + (index + 1) as f64 * width
            },
            all_count: 0,
            selected_count: 0,
            all_actual: 0,
            all_projected: 0,
            selected_actual: 0,
            selected_projected: 0,
            selected_entities: Vec::new(),
        })
        .collect();

    for obs in rows {
        let index = if range > 0.0 {
            (((obs.value - min_v) / width) as usize).min(BIN_COUNT - 1)
        } else {
            0
        };
        let bin = &mut bins[index];
        bin.all_count += 1;
        if obs.uses_actual() {
            bin.all_actual += 1;
        } else {
            bin.all_projected += 1;
        }
        if selection.is_selected(&obs.code) {
            bin.selected_count += 1;
            bin.selected_entities.push(obs.entity.clone());
            if obs.uses_actual() {
                bin.selected_actual += 1;
            } else {
                bin.selected_projected += 1;
            }
        }
    }

    bins
}

#[cfg(test)]
mod test {
    use super::*;
    use wde_model::{normalize_csv, ColumnMap};

    fn columns() -> ColumnMap {
        ColumnMap {
            code: "Code".to_string(),
            entity: "Entity".to_string(),
            year: "Year".to_string(),
            actual: "Value".to_string(),
            projected: Some("Projected".to_string()),
        }
    }

    fn observations(csv_text: &str) -> Vec<Observation> {
        normalize_csv(csv_text, &columns()).unwrap()
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let rows = observations(
            "Entity,Code,Year,Value,Projected
A,AAA,2020,10.0,
B,BBB,2020,20.0,
C,CCC,2020,30.0,
D,DDD,2020,40.0,
",
        );
        let bins = bin_rows(&rows, &SelectionState::default());
        assert_eq!(bins.len(), BIN_COUNT);
        // Width is 3.75 over [10, 40]; 40 must clamp into bin 7, not 8.
        assert_eq!(bins[0].all_count, 1);
        assert_eq!(bins[2].all_count, 1);
        assert_eq!(bins[5].all_count, 1);
        assert_eq!(bins[7].all_count, 1);
        assert_eq!(bins[7].x1, 40.0);
        assert_eq!(bins.iter().map(|b| b.all_count).sum::<usize>(), 4);
    }

    #[test]
    fn test_equal_values_collapse_to_first_bin() {
        let rows = observations(
            "Entity,Code,Year,Value,Projected
A,AAA,2020,7.0,
B,BBB,2020,7.0,
",
        );
        let bins = bin_rows(&rows, &SelectionState::default());
        assert_eq!(bins[0].all_count, 2);
        assert!(bins[1..].iter().all(|b| b.all_count == 0));
        // Degenerate extent uses a unit width instead of dividing by zero.
        assert_eq!(bins[0].x1 - bins[0].x0, 1.0);
    }

    #[test]
    fn test_selected_counts_and_entities() {
        let rows = observations(
            "Entity,Code,Year,Value,Projected
Alpha,ALB,2020,1.0,
Bravo,BRB,2020,1.5,
Charlie,CHL,2020,90.0,
",
        );
        let selection = SelectionState::new(["ALB", "CHL"]);
        let bins = bin_rows(&rows, &selection);
        assert_eq!(bins[0].all_count, 2);
        assert_eq!(bins[0].selected_count, 1);
        assert_eq!(bins[0].selected_entities, vec!["Alpha".to_string()]);
        assert_eq!(bins[7].selected_count, 1);
        assert_eq!(bins[7].selected_entities, vec!["Charlie".to_string()]);
    }

    #[test]
    fn test_projected_fallback_counted_separately() {
        let rows = observations(
            "Entity,Code,Year,Value,Projected
Alpha,ALB,2020,1.0,
Bravo,BRB,2020,,1.2
",
        );
        let selection = SelectionState::new(["BRB"]);
        let bins = bin_rows(&rows, &selection);
        assert!(bins.iter().all(|b| b.all_actual + b.all_projected == b.all_count));
        let brb_bin = bins.iter().find(|b| b.selected_count > 0).unwrap();
        assert_eq!(brb_bin.selected_projected, 1);
        assert_eq!(brb_bin.selected_actual, 0);
    }

    #[test]
    fn test_empty_rows_keep_a_frame() {
        let bins = bin_rows(&[], &SelectionState::default());
        assert_eq!(bins.len(), BIN_COUNT);
        assert!(bins.iter().all(|b| b.all_count == 0));
        assert_eq!(bins[0].x0, 0.0);
        assert_eq!(bins[7].x1, 1.0);
    }
}
