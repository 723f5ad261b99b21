use serde::{Deserialize, Serialize};

use crate::curve::RecoveryCurve;

/// Identifies a scenario within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    /// Positional index in the batch.
    Index(usize),
    /// Caller-supplied label.
    Label(String),
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{}", i),
            Self::Label(label) => write!(f, "{}", label),
        }
    }
}

/// A curve tagged with its scenario identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub curve: RecoveryCurve,
}

/// Ordered collection of recovery curves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBatch {
    scenarios: Vec<Scenario>,
}

impl ScenarioBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch whose scenarios are identified by position.
    pub fn from_curves(curves: impl IntoIterator<Item = RecoveryCurve>) -> Self {
        let mut batch = Self::new();
        for curve in curves {
            batch.push(curve);
        }
        batch
    }

    /// Append a curve identified by its position. Returns that position.
    pub fn push(&mut self, curve: RecoveryCurve) -> usize {
        let index = self.scenarios.len();
        self.scenarios.push(Scenario {
            id: ScenarioId::Index(index),
            curve,
        });
        index
    }

    /// Append a curve with a caller label. Returns its position.
    pub fn push_labeled(&mut self, label: impl Into<String>, curve: RecoveryCurve) -> usize {
        let index = self.scenarios.len();
        self.scenarios.push(Scenario {
            id: ScenarioId::Label(label.into()),
            curve,
        });
        index
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    /// The time grid shared by every curve, or `None` when the batch is
    /// empty, ragged, or sampled on different grids.
    pub fn shared_time_grid(&self) -> Option<&[f64]> {
        let first = self.scenarios.first()?.curve.time();
        self.scenarios
            .iter()
            .all(|s| s.curve.time() == first)
            .then_some(first)
    }
}

impl<'a> IntoIterator for &'a ScenarioBatch {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
