//! Crate-level error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the regression guard
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing artifact: {0}")]
    MissingArtifact(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Accuracy regression: current={current:.4}, baseline={baseline:.4}")]
    AccuracyRegression { current: f64, baseline: f64 },

    #[error("Latency regression: current={current_ms:.4}ms, baseline={baseline_ms:.4}ms")]
    LatencyRegression { current_ms: f64, baseline_ms: f64 },
}

/// Result type for guard operations
pub type Result<T> = std::result::Result<T, Error>;
