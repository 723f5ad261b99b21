//! Property tests: the batch runner reports one outcome per scenario, and the
//! vectorized grid path agrees with per-curve evaluation.

use proptest::prelude::*;
use recovery_curve::{RecoveryCurve, ScenarioBatch};
use resilience_batch::{BatchConfig, BatchRunner, CurveGrid};
use resilience_metrics::{evaluate, MetricName, MetricsConfig, RecoveryThreshold};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Batch of curves on one shared grid. Baselines may be zero or negative so
/// that some scenarios fail.
fn arb_shared_grid_batch() -> impl Strategy<Value = ScenarioBatch> {
    (2usize..30, 1usize..12).prop_flat_map(|(samples, scenarios)| {
        prop::collection::vec(
            (
                prop_oneof![4 => 1.0f64..500.0, 1 => -10.0f64..=0.0],
                prop::collection::vec(0.0f64..1.3, samples),
            ),
            scenarios,
        )
        .prop_map(|rows| {
            let mut batch = ScenarioBatch::new();
            for (baseline, fractions) in rows {
                let scale = baseline.abs().max(1.0);
                let performance: Vec<f64> = fractions.iter().map(|f| f * scale).collect();
                batch.push(RecoveryCurve::from_performance(performance, baseline).unwrap());
            }
            batch
        })
    })
}

fn arb_threshold() -> impl Strategy<Value = RecoveryThreshold> {
    prop_oneof![
        Just(RecoveryThreshold::Baseline),
        (0.0f64..0.2).prop_map(RecoveryThreshold::within),
        (1.0f64..100.0).prop_map(RecoveryThreshold::Absolute),
    ]
}

fn close(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn non_strict_reports_every_scenario(batch in arb_shared_grid_batch()) {
        let report = BatchRunner::with_default_config().run(&batch).unwrap();
        prop_assert_eq!(report.len(), batch.len());
        for (i, outcome) in report.outcomes().iter().enumerate() {
            prop_assert_eq!(outcome.index, i);
            prop_assert_eq!(&outcome.id, &batch.get(i).unwrap().id);
        }
    }

    #[test]
    fn failures_match_degenerate_baselines(batch in arb_shared_grid_batch()) {
        let report = BatchRunner::with_default_config().run(&batch).unwrap();
        for (scenario, outcome) in batch.iter().zip(report.outcomes()) {
            prop_assert_eq!(outcome.is_success(), scenario.curve.baseline() > 0.0);
        }
    }

    #[test]
    fn batch_matches_single_curve_evaluation(batch in arb_shared_grid_batch()) {
        let config = MetricsConfig::default();
        let report = BatchRunner::with_default_config().run(&batch).unwrap();
        for (scenario, outcome) in batch.iter().zip(report.outcomes()) {
            match evaluate(&scenario.curve, &config) {
                Ok(expected) => prop_assert_eq!(outcome.metrics(), Some(&expected)),
                Err(_) => prop_assert!(!outcome.is_success()),
            }
        }
    }

    #[test]
    fn strict_fails_iff_any_scenario_fails(batch in arb_shared_grid_batch()) {
        let lenient = BatchRunner::with_default_config().run(&batch).unwrap();
        let strict = BatchRunner::new(BatchConfig::strict()).run(&batch);
        prop_assert_eq!(strict.is_err(), lenient.has_failures());
    }

    #[test]
    fn grid_agrees_with_per_curve(batch in arb_shared_grid_batch(), threshold in arb_threshold()) {
        let runner = BatchRunner::new(BatchConfig::default().with_threshold(threshold));
        let per_curve = runner.run(&batch).unwrap();
        let grid = runner.run_grid(&CurveGrid::from_batch(&batch).unwrap()).unwrap();

        prop_assert_eq!(per_curve.len(), grid.len());
        for (a, b) in per_curve.outcomes().iter().zip(grid.outcomes()) {
            prop_assert_eq!(a.is_success(), b.is_success());
            if let (Some(ma), Some(mb)) = (a.metrics(), b.metrics()) {
                prop_assert_eq!(ma.recovered, mb.recovered);
                for name in MetricName::ALL {
                    prop_assert!(
                        close(ma.get(name), mb.get(name)),
                        "{} differs: {} vs {}",
                        name,
                        ma.get(name),
                        mb.get(name)
                    );
                }
            }
        }
    }
}
