//! Error types for recovery curve construction.

use thiserror::Error;

/// Malformed curve input. Raised immediately at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Time and performance sequences differ in length.
    #[error("length mismatch: {time} time samples, {performance} performance samples")]
    LengthMismatch { time: usize, performance: usize },

    /// Fewer than two samples were supplied.
    #[error("too few samples: need at least 2, got {0}")]
    TooFewSamples(usize),

    /// Time is not strictly increasing.
    #[error("time must be strictly increasing: t[{index}] = {current} follows {previous}")]
    NonMonotonicTime {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A NaN or infinite value was found.
    #[error("non-finite {field} value {value} at index {index}")]
    NonFinite {
        field: &'static str,
        index: usize,
        value: f64,
    },

    /// Time values are finite but `end - start` overflows.
    #[error("time span from {start} to {end} is not finite")]
    NonFiniteSpan { start: f64, end: f64 },

    /// Baseline is NaN or infinite.
    #[error("non-finite baseline: {0}")]
    NonFiniteBaseline(f64),
}

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;
