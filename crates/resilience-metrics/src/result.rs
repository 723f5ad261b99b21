use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Names of the metrics reported per curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    Ttr,
    AreaOfLoss,
    ResilienceIndex,
    #[serde(rename = "min_perf")]
    MinPerformance,
}

impl MetricName {
    pub const ALL: [MetricName; 4] = [
        MetricName::Ttr,
        MetricName::AreaOfLoss,
        MetricName::MinPerformance,
        MetricName::ResilienceIndex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ttr => "ttr",
            Self::AreaOfLoss => "area_of_loss",
            Self::ResilienceIndex => "resilience_index",
            Self::MinPerformance => "min_perf",
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricName {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| MetricsError::UnknownMetric(s.to_string()))
    }
}

/// Outcome of the time-to-recovery search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recovery {
    /// Elapsed time from onset to recovery; `f64::INFINITY` when not recovered.
    pub ttr: f64,
    pub recovered: bool,
    pub onset_time: Option<f64>,
    pub recovery_time: Option<f64>,
}

impl Recovery {
    /// No disruption: zero time to recover.
    pub fn undisrupted() -> Self {
        Self {
            ttr: 0.0,
            recovered: true,
            onset_time: None,
            recovery_time: None,
        }
    }

    pub fn recovered(onset_time: f64, recovery_time: f64) -> Self {
        Self {
            ttr: recovery_time - onset_time,
            recovered: true,
            onset_time: Some(onset_time),
            recovery_time: Some(recovery_time),
        }
    }

    pub fn not_recovered(onset_time: f64) -> Self {
        Self {
            ttr: f64::INFINITY,
            recovered: false,
            onset_time: Some(onset_time),
            recovery_time: None,
        }
    }
}

/// All metrics for one curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Time-to-recovery; infinite when `recovered` is false.
    #[serde(with = "infinite_as_none")]
    pub ttr: f64,
    pub recovered: bool,
    pub area_of_loss: f64,
    pub resilience_index: f64,
    pub min_performance: f64,
    pub onset_time: Option<f64>,
    pub trough_time: f64,
    pub recovery_time: Option<f64>,
}

impl MetricResult {
    pub fn get(&self, name: MetricName) -> f64 {
        match name {
            MetricName::Ttr => self.ttr,
            MetricName::AreaOfLoss => self.area_of_loss,
            MetricName::ResilienceIndex => self.resilience_index,
            MetricName::MinPerformance => self.min_performance,
        }
    }

    /// Metric name to value mapping.
    pub fn to_map(&self) -> BTreeMap<MetricName, f64> {
        MetricName::ALL
            .into_iter()
            .map(|name| (name, self.get(name)))
            .collect()
    }
}

/// JSON has no infinity; an unrecovered TTR travels as `null`.
mod infinite_as_none {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let finite = value.is_finite().then_some(*value);
        finite.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
