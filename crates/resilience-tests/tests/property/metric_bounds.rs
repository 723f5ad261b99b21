//! Property tests: metric values stay within their documented ranges for
//! arbitrary well-formed curves.

use proptest::prelude::*;
use recovery_curve::RecoveryCurve;
use resilience_metrics::{area_of_loss, evaluate, resilience_index, MetricsConfig};
use resilience_tests::{flat, v_shape};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Baseline and a performance series in `[0, 1.5 * baseline]`.
fn arb_curve() -> impl Strategy<Value = RecoveryCurve> {
    (1.0f64..1000.0, 2usize..64).prop_flat_map(|(baseline, samples)| {
        prop::collection::vec(0.0f64..1.5, samples).prop_map(move |fractions| {
            let performance: Vec<f64> = fractions.iter().map(|f| f * baseline).collect();
            RecoveryCurve::from_performance(performance, baseline).unwrap()
        })
    })
}

/// Strictly increasing, irregularly spaced time grid with performance.
fn arb_irregular_curve() -> impl Strategy<Value = RecoveryCurve> {
    prop::collection::vec((0.01f64..5.0, 0.0f64..1.2), 2..40).prop_map(|steps| {
        let mut t = 0.0;
        let mut time = Vec::with_capacity(steps.len());
        let mut performance = Vec::with_capacity(steps.len());
        for (dt, p) in steps {
            time.push(t);
            performance.push(p);
            t += dt;
        }
        RecoveryCurve::new(time, performance, 1.0).unwrap()
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn index_in_unit_interval(curve in arb_curve()) {
        let ri = resilience_index(&curve).unwrap();
        prop_assert!((0.0..=1.0).contains(&ri), "index {} out of range", ri);
    }

    #[test]
    fn index_in_unit_interval_on_irregular_grids(curve in arb_irregular_curve()) {
        let ri = resilience_index(&curve).unwrap();
        prop_assert!((0.0..=1.0).contains(&ri));
    }

    #[test]
    fn loss_never_negative(curve in arb_curve()) {
        prop_assert!(area_of_loss(&curve) >= 0.0);
    }

    #[test]
    fn undisrupted_curve_is_perfect(baseline in 0.1f64..1e4, samples in 2usize..100) {
        let m = evaluate(&flat(baseline, samples), &MetricsConfig::default()).unwrap();
        prop_assert_eq!(m.ttr, 0.0);
        prop_assert!(m.recovered);
        prop_assert_eq!(m.area_of_loss, 0.0);
        prop_assert_eq!(m.resilience_index, 1.0);
    }

    #[test]
    fn overshoot_alone_is_not_a_loss(
        baseline in 1.0f64..100.0,
        lift in prop::collection::vec(0.0f64..0.5, 2..30),
    ) {
        let performance: Vec<f64> = lift.iter().map(|l| baseline * (1.0 + l)).collect();
        let curve = RecoveryCurve::from_performance(performance, baseline).unwrap();
        let m = evaluate(&curve, &MetricsConfig::default()).unwrap();
        prop_assert_eq!(m.area_of_loss, 0.0);
        prop_assert_eq!(m.resilience_index, 1.0);
    }

    #[test]
    fn min_performance_is_a_lower_bound(curve in arb_curve()) {
        let m = evaluate(&curve, &MetricsConfig::default()).unwrap();
        prop_assert!(curve.performance().iter().all(|&p| p >= m.min_performance));
    }

    #[test]
    fn unrecovered_means_infinite_ttr(curve in arb_curve()) {
        let m = evaluate(&curve, &MetricsConfig::default()).unwrap();
        prop_assert_eq!(m.recovered, m.ttr.is_finite());
    }

    /// A deeper drop with the same timing loses at least as much.
    #[test]
    fn loss_monotone_in_depth(
        shallow in 0.0f64..1.0,
        extra in 0.0f64..1.0,
        onset in 0usize..10,
        recovery in 1usize..20,
    ) {
        let deep = (shallow + extra).min(1.0);
        let samples = onset + recovery + 5;
        let a = area_of_loss(&v_shape(100.0, shallow, onset, recovery, samples));
        let b = area_of_loss(&v_shape(100.0, deep, onset, recovery, samples));
        prop_assert!(a <= b + 1e-9, "depth {} lost {}, depth {} lost {}", shallow, a, deep, b);
    }

    /// A slower recovery from the same depth loses at least as much.
    #[test]
    fn loss_monotone_in_recovery_time(
        depth in 0.0f64..1.0,
        fast in 1usize..20,
        extra in 0usize..20,
    ) {
        let slow = fast + extra;
        let samples = slow + 10;
        let a = area_of_loss(&v_shape(10.0, depth, 3, fast, samples));
        let b = area_of_loss(&v_shape(10.0, depth, 3, slow, samples));
        prop_assert!(a <= b + 1e-9);
    }

    #[test]
    fn relaxed_threshold_never_slows_recovery(curve in arb_curve(), eps in 0.0f64..0.5) {
        let strict = evaluate(&curve, &MetricsConfig::default()).unwrap();
        let relaxed = evaluate(
            &curve,
            &MetricsConfig::with_threshold(resilience_metrics::RecoveryThreshold::within(eps)),
        )
        .unwrap();
        prop_assert!(relaxed.ttr <= strict.ttr);
    }
}
