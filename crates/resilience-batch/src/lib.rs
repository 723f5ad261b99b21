#![deny(unsafe_code)]
//! # resilience-batch
//!
//! Applies the metrics engine across a [`ScenarioBatch`].
//!
//! Two paths produce the same [`BatchReport`]:
//!
//! - [`BatchRunner::run`] evaluates each curve on its own. Works for ragged
//!   batches with per-curve time grids.
//! - [`BatchRunner::run_grid`] evaluates a [`CurveGrid`] (shared time grid,
//!   `[scenarios × time]` performance matrix) with array-wide operations.
//!
//! Scenarios are independent. In the default non-strict mode a failing
//! scenario becomes an explicit [`ScenarioFailure`] in the report and the
//! rest of the batch still runs. With `strict = true` the first failure
//! aborts the batch with [`BatchError::ScenarioFailed`].
//!
//! ## Example
//!
//! ```rust
//! use recovery_curve::{RecoveryCurve, ScenarioBatch};
//! use resilience_batch::{BatchConfig, BatchRunner};
//!
//! let mut batch = ScenarioBatch::new();
//! batch.push(RecoveryCurve::from_performance(vec![1.0, 0.5, 1.0], 1.0).unwrap());
//! batch.push(RecoveryCurve::from_performance(vec![0.0, 0.0, 0.0], 0.0).unwrap());
//!
//! let report = BatchRunner::new(BatchConfig::default()).run(&batch).unwrap();
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.failures().count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod report;
pub mod runner;

pub use config::BatchConfig;
pub use error::{BatchError, BatchResult};
pub use grid::CurveGrid;
pub use report::{BatchReport, FailureKind, ScenarioFailure, ScenarioOutcome};
pub use runner::BatchRunner;

pub use recovery_curve::{ScenarioBatch, ScenarioId};
