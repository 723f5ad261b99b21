//! End-to-end test: one degenerate scenario inside a batch is isolated in
//! lenient mode and aborts the run in strict mode, on both runner paths.

use ndarray::{array, Array1};
use recovery_curve::{RecoveryCurve, ScenarioBatch, ScenarioId};
use resilience_batch::{BatchConfig, BatchError, BatchRunner, CurveGrid, FailureKind};
use resilience_metrics::{MetricName, MetricsError};
use resilience_tests::{flat, worked_example};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn batch_with_dead_scenario() -> ScenarioBatch {
    let mut batch = ScenarioBatch::new();
    batch.push_labeled("healthy", flat(100.0, 5));
    batch.push_labeled(
        "zero-baseline",
        RecoveryCurve::from_performance(vec![0.0, -1.0, 0.0, 0.0, 0.0], 0.0).unwrap(),
    );
    batch.push_labeled("dip", worked_example());
    batch
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn lenient_run_isolates_failure() {
    let report = BatchRunner::with_default_config()
        .run(&batch_with_dead_scenario())
        .unwrap();

    assert_eq!(report.len(), 3);
    assert!(report.has_failures());
    assert_eq!(report.successes().count(), 2);

    let failed = report.get(1).unwrap();
    assert_eq!(failed.id, ScenarioId::Label("zero-baseline".into()));
    assert_eq!(failed.failure().unwrap().kind, FailureKind::DegenerateCurve);

    let ri = report.metric_column(MetricName::ResilienceIndex);
    assert_eq!(ri[0], 1.0);
    assert!(ri[1].is_nan());
    assert!((ri[2] - 0.85).abs() < 1e-12);
}

#[test]
fn strict_run_aborts_with_scenario_context() {
    let err = BatchRunner::new(BatchConfig::strict())
        .run(&batch_with_dead_scenario())
        .unwrap_err();

    match err {
        BatchError::ScenarioFailed { index, id, source } => {
            assert_eq!(index, 1);
            assert_eq!(id, ScenarioId::Label("zero-baseline".into()));
            assert!(matches!(source, MetricsError::DegenerateCurve { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn grid_path_follows_the_same_policy() {
    let time: Array1<f64> = Array1::range(0.0, 5.0, 1.0);
    let performance = array![
        [100.0, 100.0, 100.0, 100.0, 100.0],
        [0.0, -1.0, 0.0, 0.0, 0.0],
        [100.0, 100.0, 40.0, 70.0, 100.0],
    ];
    let grid = CurveGrid::new(time, performance, array![100.0, 0.0, 100.0]).unwrap();

    let lenient = BatchRunner::with_default_config().run_grid(&grid).unwrap();
    assert_eq!(lenient.len(), 3);
    assert_eq!(lenient.failures().count(), 1);
    assert!(!lenient.get(1).unwrap().is_success());

    let strict = BatchRunner::new(BatchConfig::strict()).run_grid(&grid);
    assert!(matches!(
        strict,
        Err(BatchError::ScenarioFailed { index: 1, .. })
    ));
}

#[test]
fn failure_markers_serialize() {
    let report = BatchRunner::with_default_config()
        .run(&batch_with_dead_scenario())
        .unwrap();
    let json = serde_json::to_value(report.get(1).unwrap()).unwrap();
    assert_eq!(json["result"]["Err"]["kind"], "degenerate_curve");
}
