// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for dataset validation, loading and rasterization.

use thiserror::Error;

/// Which per-series sequence an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Costs,
    Times,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Costs => f.write_str("costs"),
            Field::Times => f.write_str("times"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series '{series}': {field} has {actual} values, expected {expected} (one per city)")]
    DataShape {
        series: String,
        field: Field,
        expected: usize,
        actual: usize,
    },

    #[error("dataset is empty: the city axis has no entries")]
    EmptyDataset,

    #[error("dataset has no series to plot")]
    NoSeries,

    #[error("city axis entry {index} ({value}) must be a positive integer greater than the previous entry")]
    InvalidCityAxis { index: usize, value: u32 },

    #[error("series '{series}': {field}[{index}] is not a finite number")]
    NonFiniteValue {
        series: String,
        field: Field,
        index: usize,
    },

    #[error("series '{series}': time {value} at {city} cities cannot be shown on a log scale")]
    NonPositiveLogValue {
        series: String,
        city: u32,
        value: f64,
    },

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse CSV dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid dataset file: {0}")]
    Format(String),

    #[error("render backend failed: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
