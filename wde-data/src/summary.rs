//! Summary statistics for the selection panel: overall and per-year
//! averages of the highlighted countries.

use crate::selection::SelectionState;
use crate::year_index::YearIndex;

/// Mean resolved value over every observation in the dataset.
pub fn total_average(index: &YearIndex) -> Option<f64> {
    mean(
        index
            .years()
            .iter()
            .flat_map(|&year| index.rows_for(year))
            .map(|obs| obs.value),
    )
}

/// Mean resolved value over the selected countries, all years pooled.
pub fn selected_average(index: &YearIndex, selection: &SelectionState) -> Option<f64> {
    mean(
        index
            .years()
            .iter()
            .flat_map(|&year| index.rows_for(year))
            .filter(|obs| selection.is_selected(&obs.code))
            .map(|obs| obs.value),
    )
}

/// Per-year mean over the selected countries; years where none of the
/// selected countries have data are omitted.
pub fn yearly_averages(index: &YearIndex, selection: &SelectionState) -> Vec<(i32, f64)> {
    index
        .years()
        .iter()
        .filter_map(|&year| {
            mean(
                index
                    .rows_for(year)
                    .iter()
                    .filter(|obs| selection.is_selected(&obs.code))
                    .map(|obs| obs.value),
            )
            .map(|avg| (year, avg))
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
