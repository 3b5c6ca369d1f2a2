use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WdeError};

/// Maps dataset-specific CSV column names onto the canonical observation
/// fields. Resolved against the header row exactly once per load; no
/// downstream component ever re-resolves alternate field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub code: String,
    pub entity: String,
    pub year: String,
    pub actual: String,
    /// Forecast column used when the actual value is absent. `None` for
    /// datasets without projections.
    pub projected: Option<String>,
}

impl ColumnMap {
    /// Resolve column names to header indices. A missing required column is
    /// a load failure; a missing projected column is tolerated and treated
    /// as "no projections in this dataset".
    pub fn resolve(&self, headers: &StringRecord) -> Result<ResolvedColumns> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| WdeError::MissingColumn(name.to_string()))
        };
        let projected = match &self.projected {
            Some(name) => headers.iter().position(|h| h.trim() == name.as_str()),
            None => None,
        };
        Ok(ResolvedColumns {
            code: find(&self.code)?,
            entity: find(&self.entity)?,
            year: find(&self.year)?,
            actual: find(&self.actual)?,
            projected,
        })
    }
}

/// Header indices for one loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub code: usize,
    pub entity: usize,
    pub year: usize,
    pub actual: usize,
    pub projected: Option<usize>,
}

/// One country-year data point with a resolved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub code: String,
    pub entity: String,
    pub year: i32,
    /// Measured value; `None` means absent, never zero.
    pub actual: Option<f64>,
    /// Forecast value, used when `actual` is absent.
    pub projected: Option<f64>,
    /// Resolved value: `actual` if present, else `projected`. Always finite.
    pub value: f64,
}

impl Observation {
    /// Convert one CSV record into an observation, or `None` if the row is
    /// malformed (empty code/entity, non-integer year, or neither value
    /// parseable). Pure and total; never fails the surrounding load.
    pub fn from_record(record: &StringRecord, cols: &ResolvedColumns) -> Option<Observation> {
        let code = record.get(cols.code)?.trim();
        let entity = record.get(cols.entity)?.trim();
        if code.is_empty() || entity.is_empty() {
            return None;
        }

        let year = parse_year(record.get(cols.year)?)?;
        let actual = parse_number(record.get(cols.actual).unwrap_or(""));
        let projected = cols
            .projected
            .and_then(|idx| record.get(idx))
            .and_then(parse_number);

        let value = actual.or(projected)?;

        Some(Observation {
            code: code.to_string(),
            entity: entity.to_string(),
            year,
            actual,
            projected,
            value,
        })
    }

    /// Whether the resolved value came from the actual column rather than
    /// the projected fallback.
    pub fn uses_actual(&self) -> bool {
        self.actual.is_some()
    }
}

/// Parse a cell into a finite number. Empty and whitespace-only strings are
/// absent data, not zero; this distinction is load-bearing (absent growth is
/// not zero growth).
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_year(raw: &str) -> Option<i32> {
    let value = parse_number(raw)?;
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as i32)
}

/// Parse a CSV document and normalize every row. Malformed rows are dropped;
/// a reader-level error (broken CSV structure, missing header) is a load
/// failure for the whole dataset.
pub fn normalize_csv(csv_text: &str, columns: &ColumnMap) -> Result<Vec<Observation>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let cols = columns.resolve(&headers)?;

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(obs) = Observation::from_record(&record, &cols) {
            out.push(obs);
        }
    }
    log::debug!("normalized {} observations", out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    const STR_RESULT: &str = "\
Entity,Code,Year,Median age,Median age (Projected)
United States,USA,2020,38.5,
India,IND,2020,,28.0
China,CHN,2020,38.4,38.6
Nowhere,XXX,2020,,
,ZZZ,2020,5.0,
Oceania,,2020,5.0,
Bad Year,BYR,20.5,5.0,
";

    fn columns() -> ColumnMap {
        ColumnMap {
            code: "Code".to_string(),
            entity: "Entity".to_string(),
            year: "Year".to_string(),
            actual: "Median age".to_string(),
            projected: Some("Median age (Projected)".to_string()),
        }
    }

    #[test]
    fn test_normalize_csv() {
        let observations = normalize_csv(STR_RESULT, &columns()).unwrap();
        // XXX (neither value), blank code, blank entity, and the fractional
        // year row are all dropped.
        assert_eq!(observations.len(), 3);

        let usa = &observations[0];
        assert_eq!(usa.code, "USA");
        assert_eq!(usa.entity, "United States");
        assert_eq!(usa.year, 2020);
        assert_eq!(usa.actual, Some(38.5));
        assert_eq!(usa.value, 38.5);
        assert!(usa.uses_actual());

        let ind = &observations[1];
        assert_eq!(ind.actual, None);
        assert_eq!(ind.projected, Some(28.0));
        assert_eq!(ind.value, 28.0);
        assert!(!ind.uses_actual());
    }

    #[test]
    fn test_every_value_is_finite() {
        let observations = normalize_csv(STR_RESULT, &columns()).unwrap();
        assert!(observations.iter().all(|o| o.value.is_finite()));
    }

    #[test]
    fn test_actual_wins_over_projected() {
        let observations = normalize_csv(STR_RESULT, &columns()).unwrap();
        let chn = observations.iter().find(|o| o.code == "CHN").unwrap();
        assert_eq!(chn.value, 38.4);
    }

    #[test]
    fn test_empty_cell_is_absent_not_zero() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_missing_required_column() {
        let mut cols = columns();
        cols.year = "Years".to_string();
        let err = normalize_csv(STR_RESULT, &cols).unwrap_err();
        assert!(matches!(err, WdeError::MissingColumn(c) if c == "Years"));
    }

    #[test]
    fn test_missing_projected_column_is_tolerated() {
        let mut cols = columns();
        cols.projected = Some("N/A".to_string());
        let observations = normalize_csv(STR_RESULT, &cols).unwrap();
        // Only rows with a finite actual survive.
        assert_eq!(observations.len(), 2);
        assert!(observations.iter().all(|o| o.projected.is_none()));
    }
}
