#![deny(unsafe_code)]
//! # resilience-metrics
//!
//! Pure functions computing standardized resilience metrics from a
//! [`RecoveryCurve`]:
//!
//! - **Time-to-Recovery (TTR)**: elapsed time from disruption onset until
//!   performance first returns to the recovery threshold. Curves that never
//!   recover report `f64::INFINITY` with `recovered = false`.
//! - **Area of Loss**: trapezoidal integral of the deficit below baseline,
//!   from the onset sample to the end of the horizon.
//! - **Resilience Index**: `1 - AreaOfLoss / (baseline * duration)`, in `[0, 1]`.
//! - **Min performance**: the deepest point of the curve.
//!
//! Configuration ([`MetricsConfig`]) is passed explicitly to every call.
//!
//! ## Example
//!
//! ```rust
//! use recovery_curve::RecoveryCurve;
//! use resilience_metrics::{evaluate, MetricsConfig};
//!
//! let curve = RecoveryCurve::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![100.0, 100.0, 40.0, 70.0, 100.0],
//!     100.0,
//! )
//! .unwrap();
//!
//! let result = evaluate(&curve, &MetricsConfig::default()).unwrap();
//! assert_eq!(result.ttr, 2.0);
//! assert_eq!(result.area_of_loss, 60.0);
//! assert!((result.resilience_index - 0.85).abs() < 1e-12);
//! ```
//!
//! For named, pluggable metrics see [`MetricRegistry`].

pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod result;

pub use config::{MetricsConfig, RecoveryThreshold};
pub use engine::{
    area_of_loss, evaluate, index_from_loss, min_performance, recovery_from_samples,
    resilience_index, time_to_recovery,
};
pub use error::{MetricsError, MetricsResult};
pub use registry::{Metric, MetricRegistry};
pub use result::{MetricName, MetricResult, Recovery};

pub use recovery_curve::RecoveryCurve;
