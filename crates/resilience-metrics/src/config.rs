//! Metric configuration.
//!
//! Configuration is an explicit value handed to each computation; there is
//! no process-wide default to mutate.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

/// Performance level at which a disrupted curve counts as recovered.
///
/// Crossing is inclusive: a sample exactly at the threshold is recovered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum RecoveryThreshold {
    /// Recovered once performance is back at the curve's baseline.
    #[default]
    Baseline,
    /// Recovered at a fixed performance level.
    ///
    /// Onset is still judged against the baseline. A level above baseline
    /// therefore leaves undisrupted curves at `ttr = 0`, while a disrupted
    /// curve counts as recovered only once it climbs past the level; one that
    /// merely returns to baseline reports `ttr = inf`.
    Absolute(f64),
    /// Recovered at `baseline * fraction`, e.g. `0.98` for a 2% tolerance band.
    FractionOfBaseline(f64),
}

impl RecoveryThreshold {
    /// Tolerance band below baseline: `eps = 0.02` recovers at 98% of baseline.
    pub fn within(eps: f64) -> Self {
        Self::FractionOfBaseline(1.0 - eps)
    }

    /// Resolve the threshold for a curve with the given baseline.
    pub fn resolve(&self, baseline: f64) -> MetricsResult<f64> {
        match *self {
            Self::Baseline => Ok(baseline),
            Self::Absolute(level) => {
                if level.is_finite() {
                    Ok(level)
                } else {
                    Err(MetricsError::InvalidThreshold(format!(
                        "absolute level {} is not finite",
                        level
                    )))
                }
            }
            Self::FractionOfBaseline(fraction) => {
                if fraction.is_finite() && fraction > 0.0 {
                    Ok(baseline * fraction)
                } else {
                    Err(MetricsError::InvalidThreshold(format!(
                        "fraction {} must be finite and positive",
                        fraction
                    )))
                }
            }
        }
    }
}

/// Configuration for metric computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Recovery threshold used by time-to-recovery.
    #[serde(default)]
    pub recovery_threshold: RecoveryThreshold,
}

impl MetricsConfig {
    pub fn with_threshold(recovery_threshold: RecoveryThreshold) -> Self {
        Self { recovery_threshold }
    }

    /// Check the configuration without a curve at hand.
    pub fn validate(&self) -> MetricsResult<()> {
        self.recovery_threshold.resolve(1.0).map(|_| ())
    }
}
