use recovery_curve::{RecoveryCurve, ScenarioBatch};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::disruption::Disruption;
use crate::error::{ScenarioError, ScenarioResult};
use crate::policy::Policy;
use crate::shape::{unit_curve, CurveShape};

const OVERTIME_OVERSHOOT: f64 = 0.05;
const MIN_BASE_TTR_DAYS: f64 = 3.0;
const MIN_TTR_DAYS: f64 = 2.0;

/// Simulation horizon and curve settings shared by every scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of daily samples.
    pub horizon_days: u32,
    /// Pre-disruption performance level.
    pub baseline: f64,
    pub curve_shape: CurveShape,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_days: 60,
            baseline: 1.0,
            curve_shape: CurveShape::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_shape(mut self, curve_shape: CurveShape) -> Self {
        self.curve_shape = curve_shape;
        self
    }

    pub fn validate(&self) -> ScenarioResult<()> {
        if self.horizon_days == 0 {
            return Err(ScenarioError::ZeroHorizon);
        }
        if !self.baseline.is_finite() {
            return Err(ScenarioError::InvalidBaseline(self.baseline));
        }
        Ok(())
    }
}

/// What produced a simulated curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub disruption: Disruption,
    pub policy: Policy,
    pub curve_shape: CurveShape,
    pub cost_proxy: f64,
    /// Effective fraction of baseline lost at the trough.
    pub depth: f64,
    /// Modeled recovery window in days.
    pub ttr_model: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulatedScenario {
    pub curve: RecoveryCurve,
    pub meta: ScenarioMeta,
}

/// Simulated curves on a shared daily grid, with per-scenario metadata in
/// batch order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulatedBatch {
    pub batch: ScenarioBatch,
    pub meta: Vec<ScenarioMeta>,
}

/// Simulate one disruption under one policy.
pub fn simulate(
    disruption: &Disruption,
    policy: &Policy,
    config: &SimulationConfig,
) -> ScenarioResult<SimulatedScenario> {
    config.validate()?;
    if disruption.duration_days == 0 {
        return Err(ScenarioError::ZeroDuration);
    }

    let effects = policy.effects();
    let severity = disruption.severity.clamp(0.0, 1.0);
    let depth = (severity * effects.depth_mult).clamp(0.0, 1.0);

    let duration = f64::from(disruption.duration_days);
    let base_ttr = (duration * (1.2 + 1.6 * severity))
        .round_ties_even()
        .max(MIN_BASE_TTR_DAYS);
    let ttr = (base_ttr * effects.ttr_mult)
        .round_ties_even()
        .max(MIN_TTR_DAYS) as u32;

    let overshoot = if policy.overtime { OVERTIME_OVERSHOOT } else { 0.0 };
    let delay_days = match config.curve_shape {
        CurveShape::DelayedRebound => (0.3 * duration) as usize,
        _ => 0,
    };

    let performance: Vec<f64> = unit_curve(
        config.curve_shape,
        1.0 - depth,
        ttr as usize,
        config.horizon_days as usize,
        disruption.start_day as usize,
        delay_days,
        overshoot,
    )
    .into_iter()
    .map(|p| p * config.baseline)
    .collect();

    let curve = RecoveryCurve::from_performance(performance, config.baseline)?;

    debug!(
        kind = %disruption.kind,
        depth,
        ttr_model = ttr,
        cost_proxy = effects.cost_proxy,
        shape = %config.curve_shape,
        "Scenario simulated"
    );

    Ok(SimulatedScenario {
        curve,
        meta: ScenarioMeta {
            disruption: disruption.clone(),
            policy: policy.clone(),
            curve_shape: config.curve_shape,
            cost_proxy: effects.cost_proxy,
            depth,
            ttr_model: ttr,
        },
    })
}

/// Simulate disruption/policy pairs into a labeled batch.
///
/// Equal-length inputs pair element-wise. When one side has a single entry
/// it is applied to every entry of the other side.
#[instrument(skip_all, fields(disruptions = disruptions.len(), policies = policies.len()))]
pub fn simulate_batch(
    disruptions: &[Disruption],
    policies: &[Policy],
    config: &SimulationConfig,
) -> ScenarioResult<SimulatedBatch> {
    config.validate()?;
    if disruptions.is_empty() || policies.is_empty() {
        return Err(ScenarioError::EmptyInput);
    }

    let n = match (disruptions.len(), policies.len()) {
        (d, p) if d == p => d,
        (1, p) => p,
        (d, 1) => d,
        (d, p) => {
            return Err(ScenarioError::BroadcastMismatch {
                disruptions: d,
                policies: p,
            })
        }
    };

    let mut batch = ScenarioBatch::new();
    let mut meta = Vec::with_capacity(n);
    for i in 0..n {
        let disruption = &disruptions[if disruptions.len() == 1 { 0 } else { i }];
        let policy = &policies[if policies.len() == 1 { 0 } else { i }];
        let simulated = simulate(disruption, policy, config)?;
        batch.push_labeled(format!("{}-{}", disruption.kind, i), simulated.curve);
        meta.push(simulated.meta);
    }

    info!(scenarios = n, horizon_days = config.horizon_days, "Scenario batch simulated");

    Ok(SimulatedBatch { batch, meta })
}
