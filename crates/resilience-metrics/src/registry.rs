//! Named metrics.
//!
//! A [`MetricRegistry`] maps names to [`Metric`] implementations so callers
//! can select metrics by name and plug in their own. The registry is an
//! ordinary value: build one, register into it, pass it around.

use std::collections::{BTreeMap, HashMap};

use recovery_curve::RecoveryCurve;
use tracing::debug;

use crate::config::MetricsConfig;
use crate::engine;
use crate::error::{MetricsError, MetricsResult};
use crate::result::MetricName;

/// A scalar metric over one recovery curve.
pub trait Metric: Send + Sync {
    /// Registry key.
    fn name(&self) -> &str;

    fn evaluate(&self, curve: &RecoveryCurve, config: &MetricsConfig) -> MetricsResult<f64>;
}

struct TimeToRecovery;

impl Metric for TimeToRecovery {
    fn name(&self) -> &str {
        MetricName::Ttr.as_str()
    }

    fn evaluate(&self, curve: &RecoveryCurve, config: &MetricsConfig) -> MetricsResult<f64> {
        engine::time_to_recovery(curve, config).map(|r| r.ttr)
    }
}

struct AreaOfLoss;

impl Metric for AreaOfLoss {
    fn name(&self) -> &str {
        MetricName::AreaOfLoss.as_str()
    }

    fn evaluate(&self, curve: &RecoveryCurve, _config: &MetricsConfig) -> MetricsResult<f64> {
        Ok(engine::area_of_loss(curve))
    }
}

struct MinPerformance;

impl Metric for MinPerformance {
    fn name(&self) -> &str {
        MetricName::MinPerformance.as_str()
    }

    fn evaluate(&self, curve: &RecoveryCurve, _config: &MetricsConfig) -> MetricsResult<f64> {
        Ok(engine::min_performance(curve))
    }
}

struct ResilienceIndex;

impl Metric for ResilienceIndex {
    fn name(&self) -> &str {
        MetricName::ResilienceIndex.as_str()
    }

    fn evaluate(&self, curve: &RecoveryCurve, _config: &MetricsConfig) -> MetricsResult<f64> {
        engine::resilience_index(curve)
    }
}

/// Ordered collection of named metrics.
pub struct MetricRegistry {
    metrics: Vec<Box<dyn Metric>>,
    index: HashMap<String, usize>,
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl MetricRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            metrics: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registry holding `ttr`, `area_of_loss`, `min_perf` and `resilience_index`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        let builtins: [Box<dyn Metric>; 4] = [
            Box::new(TimeToRecovery),
            Box::new(AreaOfLoss),
            Box::new(MinPerformance),
            Box::new(ResilienceIndex),
        ];
        for metric in builtins {
            let name = metric.name().to_string();
            registry.index.insert(name, registry.metrics.len());
            registry.metrics.push(metric);
        }
        registry
    }

    /// Add a metric. Names are unique.
    pub fn register(&mut self, metric: Box<dyn Metric>) -> MetricsResult<()> {
        let name = metric.name().to_string();
        if self.index.contains_key(&name) {
            return Err(MetricsError::DuplicateMetric(name));
        }
        debug!(metric = %name, "Registering metric");
        self.index.insert(name, self.metrics.len());
        self.metrics.push(metric);
        Ok(())
    }

    pub fn get(&self, name: &str) -> MetricsResult<&dyn Metric> {
        self.index
            .get(name)
            .map(|&i| self.metrics[i].as_ref())
            .ok_or_else(|| MetricsError::UnknownMetric(name.to_string()))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Evaluate the named metrics (all registered ones when `names` is `None`).
    ///
    /// Unknown names fail before any metric runs.
    pub fn compute(
        &self,
        curve: &RecoveryCurve,
        names: Option<&[&str]>,
        config: &MetricsConfig,
    ) -> MetricsResult<BTreeMap<String, f64>> {
        let selected: Vec<&dyn Metric> = match names {
            Some(names) => names
                .iter()
                .map(|name| self.get(name))
                .collect::<MetricsResult<_>>()?,
            None => self.metrics.iter().map(|m| m.as_ref()).collect(),
        };

        selected
            .into_iter()
            .map(|metric| {
                metric
                    .evaluate(curve, config)
                    .map(|value| (metric.name().to_string(), value))
            })
            .collect()
    }
}
