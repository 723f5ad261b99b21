#![deny(unsafe_code)]
//! # resilience-scenario
//!
//! A small, interpretable parametric model producing recovery curves:
//!
//! - a [`Disruption`] sets how deep performance drops and how long the
//!   underlying outage lasts
//! - a [`Policy`] (safety stock, dual sourcing, rerouting, expediting,
//!   overtime) scales depth and recovery time and accrues a cost proxy
//! - a [`CurveShape`] picks the recovery trajectory
//!
//! [`simulate`] yields one [`RecoveryCurve`] on a daily grid; [`simulate_batch`]
//! builds a labeled [`ScenarioBatch`] on a shared grid, pairing disruptions
//! with policies or broadcasting a single one across the other side.
//!
//! [`RecoveryCurve`]: recovery_curve::RecoveryCurve
//! [`ScenarioBatch`]: recovery_curve::ScenarioBatch

pub mod disruption;
pub mod error;
pub mod policy;
pub mod shape;
pub mod simulate;

pub use disruption::{Disruption, DisruptionKind};
pub use error::{ScenarioError, ScenarioResult};
pub use policy::{Policy, PolicyEffects};
pub use shape::{unit_curve, CurveShape};
pub use simulate::{
    simulate, simulate_batch, ScenarioMeta, SimulatedBatch, SimulatedScenario, SimulationConfig,
};
