//! End-to-end test: simulate one disruption under competing recovery
//! policies, score the batch and rank policies by resilience.

use recovery_curve::ScenarioId;
use resilience_batch::BatchRunner;
use resilience_metrics::{MetricName, MetricsConfig, RecoveryThreshold};
use resilience_scenario::{
    simulate_batch, CurveShape, Disruption, DisruptionKind, Policy, SimulationConfig,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn supplier_outage() -> Disruption {
    Disruption::new(DisruptionKind::SupplierShutdown, 0.6, 14, 7).unwrap()
}

fn candidate_policies() -> Vec<Policy> {
    vec![
        Policy::none(),
        Policy::none().with_safety_stock(0.3).unwrap(),
        Policy::none().with_dual_sourcing().with_rerouting(),
        Policy::none()
            .with_safety_stock(0.3)
            .unwrap()
            .with_dual_sourcing()
            .with_expediting(),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn mitigation_improves_resilience() {
    let config = SimulationConfig::default().with_horizon(90);
    let simulated = simulate_batch(&[supplier_outage()], &candidate_policies(), &config).unwrap();
    assert_eq!(simulated.batch.len(), 4);

    let report = BatchRunner::with_default_config()
        .run_vectorized(&simulated.batch)
        .unwrap();
    assert!(!report.has_failures());

    let ri = report.metric_column(MetricName::ResilienceIndex);
    let aol = report.metric_column(MetricName::AreaOfLoss);

    // Every mitigation beats doing nothing; stacking levers beats each alone.
    for i in 1..4 {
        assert!(ri[i] > ri[0], "policy {} index {} vs {}", i, ri[i], ri[0]);
        assert!(aol[i] < aol[0]);
    }
    assert!(ri[3] > ri[1]);
    assert!(ri[3] > ri[2]);

    // Mitigation is not free.
    assert!(simulated.meta[3].cost_proxy > simulated.meta[1].cost_proxy);
    assert_eq!(simulated.meta[0].cost_proxy, 0.0);
}

#[test]
fn every_simulated_curve_recovers_within_horizon() {
    let shapes = [
        CurveShape::Linear,
        CurveShape::Exponential,
        CurveShape::Logistic,
        CurveShape::DelayedRebound,
    ];
    for shape in shapes {
        let config = SimulationConfig::default().with_shape(shape);
        let simulated =
            simulate_batch(&[supplier_outage()], &candidate_policies(), &config).unwrap();
        let report = BatchRunner::with_default_config().run(&simulated.batch).unwrap();

        for (outcome, meta) in report.outcomes().iter().zip(&simulated.meta) {
            let m = outcome.metrics().unwrap();
            assert!(m.recovered, "{} did not recover under {}", outcome.id, shape);
            assert_eq!(m.onset_time, Some(7.0));
            assert!(m.ttr <= f64::from(meta.ttr_model));
        }
    }
}

#[test]
fn tolerance_band_shortens_logistic_recovery() {
    let simulated = simulate_batch(
        &[supplier_outage()],
        &[Policy::none()],
        &SimulationConfig::default(),
    )
    .unwrap();

    let exact = BatchRunner::with_default_config().run(&simulated.batch).unwrap();
    let banded = BatchRunner::new(
        resilience_batch::BatchConfig {
            strict: false,
            metrics: MetricsConfig::with_threshold(RecoveryThreshold::within(0.02)),
        },
    )
    .run(&simulated.batch)
    .unwrap();

    let exact_ttr = exact.get(0).unwrap().metrics().unwrap().ttr;
    let banded_ttr = banded.get(0).unwrap().metrics().unwrap().ttr;
    assert!(banded_ttr < exact_ttr);
}

#[test]
fn scenarios_are_labeled_by_disruption() {
    let disruptions = vec![
        Disruption::new(DisruptionKind::PortClosure, 0.4, 5, 2).unwrap(),
        Disruption::new(DisruptionKind::Cyberattack, 0.9, 3, 10).unwrap(),
    ];
    let simulated =
        simulate_batch(&disruptions, &[Policy::none()], &SimulationConfig::default()).unwrap();
    let report = BatchRunner::with_default_config().run(&simulated.batch).unwrap();

    let cyber = report
        .find(&ScenarioId::Label("cyberattack-1".into()))
        .and_then(|o| o.metrics())
        .unwrap();
    assert_eq!(cyber.onset_time, Some(10.0));
}
