use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use wde_model::{Observation, Result, WdeError};

/// One entry in the country directory backing the checkbox selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub code: String,
    pub entity: String,
}

/// Observations grouped by year, each group sorted descending by resolved
/// value (rank 1 = highest). Immutable once built; switching datasets
/// constructs a fresh index and swaps it wholesale.
#[derive(Debug, Clone)]
pub struct YearIndex {
    years: Vec<i32>,
    by_year: HashMap<i32, Vec<Observation>>,
    directory: Vec<CountryEntry>,
}

impl YearIndex {
    /// Group and sort the observations. A dataset yielding zero valid
    /// observations is a load failure, never an empty index.
    pub fn build(observations: Vec<Observation>, dataset: &str) -> Result<YearIndex> {
        if observations.is_empty() {
            return Err(WdeError::EmptyDataset {
                metric: dataset.to_string(),
            });
        }

        let mut directory_map: HashMap<String, String> = HashMap::new();
        let mut by_year: HashMap<i32, Vec<Observation>> = HashMap::new();
        for obs in observations {
            directory_map
                .entry(obs.code.clone())
                .or_insert_with(|| obs.entity.clone());
            by_year.entry(obs.year).or_default().push(obs);
        }

        for group in by_year.values_mut() {
            // Descending by value; ties broken ascending by code so rank
            // assignment is deterministic across loads.
            group.sort_by(|a, b| {
                b.value
                    .total_cmp(&a.value)
                    .then_with(|| a.code.cmp(&b.code))
            });
        }

        let mut years: Vec<i32> = by_year.keys().copied().collect();
        years.sort_unstable();

        let mut directory: Vec<CountryEntry> = directory_map
            .into_iter()
            .map(|(code, entity)| CountryEntry { code, entity })
            .collect();
        directory.sort_by(|a, b| a.entity.cmp(&b.entity));

        log::info!(
            "indexed {} years, {} countries for '{}'",
            years.len(),
            directory.len(),
            dataset
        );

        Ok(YearIndex {
            years,
            by_year,
            directory,
        })
    }

    /// Ascending list of distinct years. Never empty.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Year at a position, clamped into range.
    pub fn year_at(&self, pos: usize) -> i32 {
        self.years[pos.min(self.years.len() - 1)]
    }

    /// Observations for one year, rank order (descending by value). Years
    /// with no data yield an empty slice, not an error.
    pub fn rows_for(&self, year: i32) -> &[Observation] {
        self.by_year.get(&year).map_or(&[], Vec::as_slice)
    }

    /// Observations for the year at a position.
    pub fn rows_at(&self, pos: usize) -> &[Observation] {
        self.rows_for(self.year_at(pos))
    }

    /// Position of the year closest to `target`; equidistant targets
    /// resolve to the earlier year.
    pub fn nearest_year_position(&self, target: i32) -> usize {
        let mut best_pos = 0;
        let mut best_diff = (self.years[0] - target).abs();
        for (pos, year) in self.years.iter().enumerate().skip(1) {
            let diff = (year - target).abs();
            if diff < best_diff {
                best_diff = diff;
                best_pos = pos;
            }
        }
        best_pos
    }

    /// Unique (code, entity) pairs sorted by display name.
    pub fn directory(&self) -> &[CountryEntry] {
        &self.directory
    }
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

    fn build_index(csv_text: &str) -> YearIndex {
        let observations = normalize_csv(csv_text, &columns()).unwrap();
        YearIndex::build(observations, "test").unwrap()
    }

    const STR_RESULT: &str = "\
Entity,Code,Year,Value,Projected
India,IND,2020,,28.0
United States,USA,2020,38.5,
China,CHN,2020,38.4,
United States,USA,2010,36.9,
China,CHN,2010,34.5,
";

    #[test]
    fn test_descending_order_and_rank_bijection() {
        let index = build_index(STR_RESULT);
        for &year in index.years() {
            let rows = index.rows_for(year);
            assert!(rows.windows(2).all(|w| w[0].value >= w[1].value));
            // Rank is the 1-based position; every position gets exactly one.
            let ranks: Vec<usize> = (1..=rows.len()).collect();
            assert_eq!(ranks.len(), rows.len());
        }
    }

    #[test]
    fn test_actual_outranks_projected_fallback() {
        let index = build_index(STR_RESULT);
        let rows = index.rows_for(2020);
        assert_eq!(rows[0].code, "USA");
        assert_eq!(rows[0].value, 38.5);
        assert_eq!(rows[2].code, "IND");
        assert_eq!(rows[2].value, 28.0);
    }

    #[test]
    fn test_equal_values_tie_break_by_code() {
        let csv_text = "\
Entity,Code,Year,Value,Projected
Bravo,BRB,2000,5.0,
Alpha,ALB,2000,5.0,
";
        let index = build_index(csv_text);
        let rows = index.rows_for(2000);
        assert_eq!(rows[0].code, "ALB");
        assert_eq!(rows[1].code, "BRB");
    }

    #[test]
    fn test_years_ascending() {
        let index = build_index(STR_RESULT);
        assert_eq!(index.years(), &[2010, 2020]);
        assert_eq!(index.year_at(0), 2010);
        assert_eq!(index.year_at(99), 2020);
    }

    #[test]
    fn test_nearest_year_position() {
        let csv_text = "\
Entity,Code,Year,Value,Projected
A,AAA,2000,1.0,
A,AAA,2010,1.0,
A,AAA,2020,1.0,
";
        let index = build_index(csv_text);
        assert_eq!(index.nearest_year_position(2010), 1);
        assert_eq!(index.nearest_year_position(2012), 1);
        assert_eq!(index.nearest_year_position(2019), 2);
        // Equidistant resolves to the lower index.
        assert_eq!(index.nearest_year_position(2005), 0);
        assert_eq!(index.nearest_year_position(1800), 0);
        assert_eq!(index.nearest_year_position(3000), 2);
    }

    #[test]
    fn test_empty_dataset_is_a_load_failure() {
        let err = YearIndex::build(Vec::new(), "median-age").unwrap_err();
        assert!(matches!(err, WdeError::EmptyDataset { metric } if metric == "median-age"));
    }

    #[test]
    fn test_directory_sorted_by_entity() {
        let index = build_index(STR_RESULT);
        let names: Vec<&str> = index.directory().iter().map(|e| e.entity.as_str()).collect();
        assert_eq!(names, vec!["China", "India", "United States"]);
    }

    #[test]
    fn test_missing_year_is_no_data_not_zero() {
        let index = build_index(STR_RESULT);
        assert!(index.rows_for(1999).is_empty());
        // IND has no 2010 row; absence means no observation for that year.
        assert!(index.rows_for(2010).iter().all(|o| o.code != "IND"));
    }
}
