//! Batch runner configuration.

use std::collections::HashMap;

use resilience_metrics::{MetricsConfig, RecoveryThreshold};
use serde::{Deserialize, Serialize};

use crate::error::{BatchError, BatchResult};

/// Prefix for environment overrides, e.g. `RESILIENCE_STRICT=true` or
/// `RESILIENCE_METRICS__RECOVERY_THRESHOLD__MODE=absolute`.
pub const ENV_PREFIX: &str = "RESILIENCE";

/// Configuration for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Abort on the first failing scenario instead of recording it.
    #[serde(default)]
    pub strict: bool,

    /// Metric configuration applied to every scenario.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl BatchConfig {
    /// Fail-fast configuration.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    pub fn with_threshold(mut self, threshold: RecoveryThreshold) -> Self {
        self.metrics.recovery_threshold = threshold;
        self
    }

    /// Load configuration: defaults, then the optional file, then
    /// `RESILIENCE_*` environment variables.
    pub fn load(path: Option<&str>) -> BatchResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`BatchConfig::load`], reading overrides from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        path: Option<&str>,
        env: Option<HashMap<String, String>>,
    ) -> BatchResult<Self> {
        let mut builder = ::config::Config::builder();

        builder = builder.add_source(::config::Config::try_from(&BatchConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(::config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: BatchConfig = builder.build()?.try_deserialize()?;
        config.metrics.validate().map_err(BatchError::InvalidMetrics)?;
        Ok(config)
    }
}
