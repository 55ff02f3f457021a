//! Error taxonomy for chart rendering.
//!
//! Malformed input shapes are rejected at the boundary with a descriptive
//! error instead of producing garbage geometry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart data has no labels")]
    EmptyLabels,

    #[error("chart data has no datasets")]
    EmptyDatasets,

    #[error("dataset {dataset} has {values} values but there are {labels} labels")]
    LengthMismatch {
        dataset: usize,
        labels: usize,
        values: usize,
    },

    #[error("dataset {dataset} value at index {index} is not finite")]
    NonFiniteValue { dataset: usize, index: usize },

    #[error("unparseable color {0:?}; expected #RGB, #RRGGBB, or #RRGGBBAA")]
    InvalidColor(String),

    #[error("invalid chart dimensions {width}x{height}; width and height must be positive")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("bar percentage must be positive, got {0}")]
    InvalidBarPercentage(f64),

    #[error("segment count must be at least 1")]
    InvalidSegments,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
