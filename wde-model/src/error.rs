/// Error types for dataset loading and indexing
use thiserror::Error;

/// Main error type for dataset operations.
///
/// A load failure (CSV parse error, missing column, empty dataset) is fatal
/// to that dataset load and blocks renderer invocation. Per-row gaps are not
/// errors; the normalizer drops malformed rows silently.
#[derive(Error, Debug)]
pub enum WdeError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is not present in the CSV header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Normalization produced zero valid observations
    #[error("Dataset '{metric}' contains no valid observations")]
    EmptyDataset { metric: String },

    /// Failed to parse GeoJSON data
    #[error("Failed to parse GeoJSON: {0}")]
    GeoParse(#[from] serde_json::Error),

    /// GeoJSON document has no feature collection
    #[error("GeoJSON document contains no features")]
    NoFeatures,
}

/// Type alias for Results using WdeError
pub type Result<T> = std::result::Result<T, WdeError>;
