use serde::{Deserialize, Serialize};

/// Trajectory of the recovery phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveShape {
    Linear,
    Exponential,
    #[default]
    Logistic,
    /// Flat at the trough for part of the window, then a steep logistic climb.
    DelayedRebound,
}

impl CurveShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Logistic => "logistic",
            Self::DelayedRebound => "delayed_rebound",
        }
    }

    /// Recovery progress in [0, 1] at normalized position `x` in the recovery
    /// window. `delay_fraction` only affects [`CurveShape::DelayedRebound`].
    pub fn progress(&self, x: f64, delay_fraction: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Exponential => {
                const K: f64 = 4.0;
                (1.0 - (-K * x).exp()) / (1.0 - (-K).exp())
            }
            Self::Logistic => normalized_sigmoid(x, 10.0),
            Self::DelayedRebound => {
                if x < delay_fraction {
                    0.0
                } else {
                    let xr = (x - delay_fraction) / (1.0 - delay_fraction).max(1e-9);
                    normalized_sigmoid(xr, 12.0)
                }
            }
        }
    }
}

impl std::fmt::Display for CurveShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logistic centered at 0.5, rescaled so it maps 0 -> 0 and 1 -> 1.
fn normalized_sigmoid(x: f64, k: f64) -> f64 {
    let sig = |v: f64| 1.0 / (1.0 + (-k * (v - 0.5)).exp());
    let (lo, hi) = (sig(0.0), sig(1.0));
    (sig(x) - lo) / (hi - lo)
}

/// Unit-baseline performance over `horizon` daily samples.
///
/// Performance is 1.0 before `start`, drops to `impact` at `start`, follows
/// `shape` back up over `ttr` days and holds its final value afterwards.
/// `overshoot` adds `overshoot * x^2` across the recovery window.
pub fn unit_curve(
    shape: CurveShape,
    impact: f64,
    ttr: usize,
    horizon: usize,
    start: usize,
    delay_days: usize,
    overshoot: f64,
) -> Vec<f64> {
    let mut perf = vec![1.0; horizon];
    if start >= horizon {
        return perf;
    }
    perf[start..].fill(impact);

    let end = (horizon - 1).min(start + ttr);
    let n = end - start + 1;
    if n <= 1 {
        return perf;
    }

    let delay_fraction = (delay_days as f64 / ttr.max(1) as f64).min(0.9);
    let span = (n - 1) as f64;
    for (i, p) in perf[start..=end].iter_mut().enumerate() {
        let x = i as f64 / span;
        let s = shape.progress(x, delay_fraction);
        // Closes the gap multiplicatively so full progress lands exactly on 1.0.
        *p = 1.0 - (1.0 - impact) * (1.0 - s);
        if overshoot > 0.0 {
            *p += overshoot * x * x;
        }
    }

    let last = perf[end];
    perf[end + 1..].fill(last);
    perf
}
