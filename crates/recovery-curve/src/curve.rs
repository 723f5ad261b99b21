use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CurveError, CurveResult};

/// One scenario's performance trajectory over time.
///
/// Invariants (checked by [`RecoveryCurve::new`]):
/// - `time.len() == performance.len() >= 2`
/// - time is finite and strictly increasing
/// - performance and baseline are finite
///
/// Performance nominally lies in `[0, baseline]`. Values above the baseline
/// (overshoot after recovery) are accepted and simply contribute no loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurve")]
pub struct RecoveryCurve {
    time: Vec<f64>,
    performance: Vec<f64>,
    baseline: f64,
}

/// Unvalidated wire form; deserialization goes through [`RecoveryCurve::new`].
#[derive(Deserialize)]
struct RawCurve {
    time: Vec<f64>,
    performance: Vec<f64>,
    baseline: f64,
}

impl TryFrom<RawCurve> for RecoveryCurve {
    type Error = CurveError;

    fn try_from(raw: RawCurve) -> CurveResult<Self> {
        Self::new(raw.time, raw.performance, raw.baseline)
    }
}

/// Check that a time grid has at least two finite, strictly increasing samples
/// and a finite overall span.
pub fn validate_time_grid(time: &[f64]) -> CurveResult<()> {
    if time.len() < 2 {
        return Err(CurveError::TooFewSamples(time.len()));
    }
    check_finite("time", time)?;
    for (i, pair) in time.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(CurveError::NonMonotonicTime {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    let (start, end) = (time[0], time[time.len() - 1]);
    if !(end - start).is_finite() {
        return Err(CurveError::NonFiniteSpan { start, end });
    }
    Ok(())
}

/// Index of the first sample below `baseline`.
pub fn onset_index(performance: &[f64], baseline: f64) -> Option<usize> {
    performance.iter().position(|&p| p < baseline)
}

/// Index of the first occurrence of the minimum. Zero for an empty slice.
pub fn trough_index(performance: &[f64]) -> usize {
    let mut best = 0;
    for (i, &p) in performance.iter().enumerate().skip(1) {
        if p < performance[best] {
            best = i;
        }
    }
    best
}

fn check_finite(field: &'static str, values: &[f64]) -> CurveResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(CurveError::NonFinite {
            field,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

impl RecoveryCurve {
    /// Build a curve from equal-length time and performance sequences.
    pub fn new(
        time: impl Into<Vec<f64>>,
        performance: impl Into<Vec<f64>>,
        baseline: f64,
    ) -> CurveResult<Self> {
        let time = time.into();
        let performance = performance.into();

        if time.len() != performance.len() {
            return Err(CurveError::LengthMismatch {
                time: time.len(),
                performance: performance.len(),
            });
        }
        if !baseline.is_finite() {
            return Err(CurveError::NonFiniteBaseline(baseline));
        }
        validate_time_grid(&time)?;
        check_finite("performance", &performance)?;

        debug!(samples = time.len(), baseline, "Recovery curve constructed");

        Ok(Self {
            time,
            performance,
            baseline,
        })
    }

    /// Build a curve sampled on the unit grid `0, 1, ..., n - 1`.
    pub fn from_performance(performance: impl Into<Vec<f64>>, baseline: f64) -> CurveResult<Self> {
        let performance = performance.into();
        let time: Vec<f64> = (0..performance.len()).map(|i| i as f64).collect();
        Self::new(time, performance, baseline)
    }

    /// Pre-disruption performance level.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn performance(&self) -> &[f64] {
        &self.performance
    }

    /// Iterate `(time, performance)` pairs in order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.performance.iter().copied())
    }

    /// Number of samples (always at least 2).
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false for a constructed curve.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn start_time(&self) -> f64 {
        self.time[0]
    }

    pub fn end_time(&self) -> f64 {
        self.time[self.time.len() - 1]
    }

    /// Total observed duration, `end_time - start_time`.
    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Index of the first sample below baseline, or `None` when the curve
    /// never drops below it.
    pub fn disruption_onset(&self) -> Option<usize> {
        onset_index(&self.performance, self.baseline)
    }

    /// Time of the disruption onset.
    pub fn onset_time(&self) -> Option<f64> {
        self.disruption_onset().map(|i| self.time[i])
    }

    /// Index of the first occurrence of the minimum performance.
    pub fn trough(&self) -> usize {
        trough_index(&self.performance)
    }

    pub fn min_performance(&self) -> f64 {
        self.performance[self.trough()]
    }

    /// Per-sample deficit below baseline, clipped at zero.
    pub fn loss(&self) -> Vec<f64> {
        self.performance
            .iter()
            .map(|&p| (self.baseline - p).max(0.0))
            .collect()
    }
}
