//! Metric computations over a single recovery curve.
//!
//! Every function here is pure: curves are borrowed read-only and
//! configuration is passed in.

use recovery_curve::RecoveryCurve;
use tracing::debug;

use crate::config::MetricsConfig;
use crate::error::{MetricsError, MetricsResult};
use crate::result::{MetricResult, Recovery};

/// Time from disruption onset until performance first reaches the recovery
/// threshold again.
///
/// The search starts at the onset sample and is inclusive. A curve that
/// never reaches the threshold within the horizon yields
/// [`Recovery::not_recovered`] rather than an error.
pub fn time_to_recovery(curve: &RecoveryCurve, config: &MetricsConfig) -> MetricsResult<Recovery> {
    let threshold = config.recovery_threshold.resolve(curve.baseline())?;
    let recovery = recovery_from_samples(
        curve.time(),
        curve.performance(),
        curve.disruption_onset(),
        threshold,
    );
    if !recovery.recovered {
        debug!(
            onset_time = ?recovery.onset_time,
            threshold,
            horizon = curve.end_time(),
            "Curve does not recover within horizon"
        );
    }
    Ok(recovery)
}

/// Recovery search over raw samples, starting at `onset`.
///
/// `onset` is the first sample below baseline (see
/// [`recovery_curve::onset_index`]); `None` means the samples were never
/// disrupted. Shared by the per-curve and vectorized paths.
pub fn recovery_from_samples(
    time: &[f64],
    performance: &[f64],
    onset: Option<usize>,
    threshold: f64,
) -> Recovery {
    let Some(onset) = onset else {
        return Recovery::undisrupted();
    };
    match performance[onset..].iter().position(|&p| p >= threshold) {
        Some(offset) => Recovery::recovered(time[onset], time[onset + offset]),
        None => Recovery::not_recovered(time[onset]),
    }
}

/// Trapezoidal integral of the deficit below baseline from the onset sample
/// to the end of the horizon.
///
/// The disruption is a step at the onset sample: the interval that ends at
/// onset contributes nothing. Deficits are clipped at zero, so overshoot
/// above baseline never offsets loss.
pub fn area_of_loss(curve: &RecoveryCurve) -> f64 {
    let Some(onset) = curve.disruption_onset() else {
        return 0.0;
    };
    let baseline = curve.baseline();

    curve.time()[onset..]
        .windows(2)
        .zip(curve.performance()[onset..].windows(2))
        .map(|(t, p)| {
            let d0 = (baseline - p[0]).max(0.0);
            let d1 = (baseline - p[1]).max(0.0);
            0.5 * (d0 + d1) * (t[1] - t[0])
        })
        .sum()
}

/// Normalize an area of loss against `baseline * duration`.
///
/// Shared by the per-curve and vectorized paths so both clamp and fail the
/// same way.
pub fn index_from_loss(area_of_loss: f64, baseline: f64, duration: f64) -> MetricsResult<f64> {
    if baseline.is_nan() || baseline <= 0.0 {
        return Err(MetricsError::degenerate(format!(
            "baseline {} must be positive",
            baseline
        )));
    }
    if duration.is_nan() || duration <= 0.0 {
        return Err(MetricsError::degenerate(format!(
            "duration {} must be positive",
            duration
        )));
    }
    let scale = baseline * duration;
    if !scale.is_finite() {
        return Err(MetricsError::degenerate(format!(
            "baseline {} times duration {} is not finite",
            baseline, duration
        )));
    }
    Ok((1.0 - area_of_loss / scale).clamp(0.0, 1.0))
}

/// `1 - AreaOfLoss / (baseline * duration)`, clamped to `[0, 1]`.
pub fn resilience_index(curve: &RecoveryCurve) -> MetricsResult<f64> {
    index_from_loss(area_of_loss(curve), curve.baseline(), curve.duration())
}

/// Deepest performance reached over the horizon.
pub fn min_performance(curve: &RecoveryCurve) -> f64 {
    curve.min_performance()
}

/// Compute every metric for one curve.
pub fn evaluate(curve: &RecoveryCurve, config: &MetricsConfig) -> MetricsResult<MetricResult> {
    let recovery = time_to_recovery(curve, config)?;
    let area = area_of_loss(curve);
    let index = index_from_loss(area, curve.baseline(), curve.duration())?;
    let trough = curve.trough();

    debug!(
        ttr = recovery.ttr,
        recovered = recovery.recovered,
        area_of_loss = area,
        resilience_index = index,
        "Curve evaluated"
    );

    Ok(MetricResult {
        ttr: recovery.ttr,
        recovered: recovery.recovered,
        area_of_loss: area,
        resilience_index: index,
        min_performance: curve.performance()[trough],
        onset_time: recovery.onset_time,
        trough_time: curve.time()[trough],
        recovery_time: recovery.recovery_time,
    })
}
