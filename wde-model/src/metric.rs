use serde::{Deserialize, Serialize};

use crate::observation::ColumnMap;

/// The demographic datasets the dashboard can display. Each carries the
/// column mapping for its CSV and the legend/axis title.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Metric {
    MedianAge,
    PopulationGrowth,
    Population,
    LifeExpectancy,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::MedianAge,
        Metric::PopulationGrowth,
        Metric::Population,
        Metric::LifeExpectancy,
    ];

    /// Stable identifier used for dropdown values and dataset file names.
    pub fn id(&self) -> &'static str {
        match self {
            Metric::MedianAge => "median-age",
            Metric::PopulationGrowth => "population-growth-rates",
            Metric::Population => "population-with-un-projections",
            Metric::LifeExpectancy => "life-expectancy",
        }
    }

    pub fn from_id(id: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn legend_title(&self) -> &'static str {
        match self {
            Metric::MedianAge => "Median Age",
            Metric::PopulationGrowth => "Population Growth Rate (%)",
            Metric::Population => "Population",
            Metric::LifeExpectancy => "Life Expectancy",
        }
    }

    /// Column mapping for this metric's CSV. Life expectancy has no
    /// projection column.
    pub fn column_map(&self) -> ColumnMap {
        let (actual, projected) = match self {
            Metric::MedianAge => (
                "Median age, total",
                Some("Median age (Projected)"),
            ),
            Metric::PopulationGrowth => (
                "Growth rate, total",
                Some("Population growth rate (%) (Projected)"),
            ),
            Metric::Population => (
                "Population, total",
                Some("Population, medium projection (Projected)"),
            ),
            Metric::LifeExpectancy => ("Life expectancy", None),
        };
        ColumnMap {
            code: "Code".to_string(),
            entity: "Entity".to_string(),
            year: "Year".to_string(),
            actual: actual.to_string(),
            projected: projected.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_id(metric.id()), Some(metric));
        }
        assert_eq!(Metric::from_id("snowfall"), None);
    }

    #[test]
    fn test_life_expectancy_has_no_projection() {
        assert_eq!(Metric::LifeExpectancy.column_map().projected, None);
        assert!(Metric::Population.column_map().projected.is_some());
    }
}
