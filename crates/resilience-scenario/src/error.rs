use recovery_curve::CurveError;
use thiserror::Error;

/// Errors from scenario construction and simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("duration_days must be > 0")]
    ZeroDuration,

    #[error("severity must be finite, got {0}")]
    InvalidSeverity(f64),

    #[error("safety_stock must be finite, got {0}")]
    InvalidSafetyStock(f64),

    #[error("horizon_days must be > 0")]
    ZeroHorizon,

    #[error("baseline must be finite, got {0}")]
    InvalidBaseline(f64),

    #[error("disruptions and policies must be non-empty")]
    EmptyInput,

    #[error("cannot pair {disruptions} disruptions with {policies} policies; lengths must match")]
    BroadcastMismatch { disruptions: usize, policies: usize },

    #[error("simulated curve is invalid: {0}")]
    Curve(#[from] CurveError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
