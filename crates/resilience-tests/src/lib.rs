//! Shared curve fixtures for the cross-crate test suites.

use recovery_curve::RecoveryCurve;

/// Flat curve at `baseline` over `samples` unit-spaced points.
pub fn flat(baseline: f64, samples: usize) -> RecoveryCurve {
    RecoveryCurve::from_performance(vec![baseline; samples], baseline)
        .expect("flat fixture is a valid curve")
}

/// V-shaped disruption on a unit grid: baseline until `onset`, a drop to
/// `baseline * (1 - depth)`, then a linear climb back over `recovery` steps.
pub fn v_shape(
    baseline: f64,
    depth: f64,
    onset: usize,
    recovery: usize,
    samples: usize,
) -> RecoveryCurve {
    let trough = baseline * (1.0 - depth);
    let performance: Vec<f64> = (0..samples)
        .map(|i| {
            if i < onset {
                baseline
            } else if recovery == 0 {
                trough
            } else {
                let progress = ((i - onset) as f64 / recovery as f64).min(1.0);
                baseline - (baseline - trough) * (1.0 - progress)
            }
        })
        .collect();
    RecoveryCurve::from_performance(performance, baseline)
        .expect("v-shape fixture is a valid curve")
}

/// The four-sample worked example: baseline 100, trough 40 at t=2,
/// back to baseline at t=4.
pub fn worked_example() -> RecoveryCurve {
    RecoveryCurve::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![100.0, 100.0, 40.0, 70.0, 100.0],
        100.0,
    )
    .expect("worked example is a valid curve")
}

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
