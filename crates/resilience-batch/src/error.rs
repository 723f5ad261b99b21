//! Error types for batch processing.

use recovery_curve::{CurveError, ScenarioId};
use resilience_metrics::MetricsError;
use thiserror::Error;

/// Errors that abort a whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// A scenario failed while running in strict mode.
    #[error("scenario {id} (index {index}) failed: {source}")]
    ScenarioFailed {
        index: usize,
        id: ScenarioId,
        #[source]
        source: MetricsError,
    },

    /// Curves have different sample counts and cannot share a grid.
    #[error("ragged batch: scenario {index} has {found} samples, expected {expected}")]
    RaggedBatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Curves have the same length but different time values.
    #[error("scenario {index} is sampled on a different time grid")]
    GridMismatch { index: usize },

    /// Array dimensions disagree.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The batch has no scenarios.
    #[error("batch is empty")]
    EmptyBatch,

    /// Grid data violates the curve invariants.
    #[error("invalid curve data: {0}")]
    InvalidCurve(#[from] CurveError),

    /// Metric configuration rejected before running.
    #[error("invalid metrics configuration: {0}")]
    InvalidMetrics(MetricsError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<::config::ConfigError> for BatchError {
    fn from(e: ::config::ConfigError) -> Self {
        Self::Configuration(e.to_string())
    }
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;
