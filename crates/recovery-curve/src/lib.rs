#![deny(unsafe_code)]
//! # recovery-curve
//!
//! The leaf data model of the resilience metrics workspace.
//!
//! A [`RecoveryCurve`] is one scenario's performance trajectory: an ordered
//! sequence of `(time, performance)` samples plus the pre-disruption
//! baseline. Curves are validated once at construction and are read-only
//! afterwards, so every metric can assume:
//!
//! - at least two samples
//! - strictly increasing, finite time with a finite overall span
//! - finite performance values and baseline
//!
//! A [`ScenarioBatch`] is an ordered collection of curves, each tagged with a
//! [`ScenarioId`]. Batches sharing one time grid can be turned into a dense
//! `[scenarios × time]` matrix by the batch runner.

pub mod batch;
pub mod curve;
pub mod error;

pub use batch::{Scenario, ScenarioBatch, ScenarioId};
pub use curve::{onset_index, trough_index, validate_time_grid, RecoveryCurve};
pub use error::{CurveError, CurveResult};
