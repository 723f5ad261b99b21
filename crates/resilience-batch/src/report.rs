use ndarray::Array1;
use recovery_curve::ScenarioId;
use resilience_metrics::{MetricName, MetricResult, MetricsError};
use serde::{Deserialize, Serialize};

/// Why a scenario produced no metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Baseline or duration not positive.
    DegenerateCurve,
    /// Recovery threshold could not be resolved.
    InvalidThreshold,
    /// Any other metric failure.
    Metric,
}

/// Per-scenario failure marker recorded in non-strict mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&MetricsError> for ScenarioFailure {
    fn from(e: &MetricsError) -> Self {
        let kind = match e {
            MetricsError::DegenerateCurve { .. } => FailureKind::DegenerateCurve,
            MetricsError::InvalidThreshold(_) => FailureKind::InvalidThreshold,
            _ => FailureKind::Metric,
        };
        Self {
            kind,
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ScenarioFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Metrics (or a failure marker) for one scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub index: usize,
    pub id: ScenarioId,
    pub result: Result<MetricResult, ScenarioFailure>,
}

impl ScenarioOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn metrics(&self) -> Option<&MetricResult> {
        self.result.as_ref().ok()
    }

    pub fn failure(&self) -> Option<&ScenarioFailure> {
        self.result.as_ref().err()
    }
}

/// Ordered per-scenario outcomes of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    outcomes: Vec<ScenarioOutcome>,
}

impl BatchReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// Equals the input batch size.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    pub fn get(&self, index: usize) -> Option<&ScenarioOutcome> {
        self.outcomes.get(index)
    }

    pub fn find(&self, id: &ScenarioId) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| &o.id == id)
    }

    pub fn successes(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_success())
    }

    /// One metric across the batch; failed scenarios read as `NaN`.
    pub fn metric_column(&self, name: MetricName) -> Array1<f64> {
        self.outcomes
            .iter()
            .map(|o| o.metrics().map_or(f64::NAN, |m| m.get(name)))
            .collect()
    }

    /// Recovery flags across the batch; failed scenarios read as `false`.
    pub fn recovered_column(&self) -> Array1<bool> {
        self.outcomes
            .iter()
            .map(|o| o.metrics().is_some_and(|m| m.recovered))
            .collect()
    }
}

impl<'a> IntoIterator for &'a BatchReport {
    type Item = &'a ScenarioOutcome;
    type IntoIter = std::slice::Iter<'a, ScenarioOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
