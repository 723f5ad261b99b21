//! Error types for metric computation.

use thiserror::Error;

/// Errors raised while computing metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// The curve cannot be normalized (baseline or duration not positive).
    #[error("degenerate curve: {reason}")]
    DegenerateCurve { reason: String },

    /// The recovery threshold configuration is unusable.
    #[error("invalid recovery threshold: {0}")]
    InvalidThreshold(String),

    /// No metric registered under this name.
    #[error("metric '{0}' not registered")]
    UnknownMetric(String),

    /// A metric with this name is already registered.
    #[error("metric '{0}' already registered")]
    DuplicateMetric(String),
}

impl MetricsError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateCurve {
            reason: reason.into(),
        }
    }
}

/// Result type for metric operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
