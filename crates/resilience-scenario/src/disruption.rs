use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};

/// Category of disruptive event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisruptionKind {
    SupplierShutdown,
    PortClosure,
    TransportDelay,
    Cyberattack,
    DemandSpike,
}

impl DisruptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SupplierShutdown => "supplier_shutdown",
            Self::PortClosure => "port_closure",
            Self::TransportDelay => "transport_delay",
            Self::Cyberattack => "cyberattack",
            Self::DemandSpike => "demand_spike",
        }
    }
}

impl std::fmt::Display for DisruptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A disruptive event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disruption {
    pub kind: DisruptionKind,
    /// Fraction of performance lost at the trough, in [0.0, 1.0].
    pub severity: f64,
    /// Length of the underlying outage in days (> 0).
    pub duration_days: u32,
    /// Day the disruption hits.
    pub start_day: u32,
}

impl Disruption {
    /// Severity is clamped to [0, 1].
    pub fn new(
        kind: DisruptionKind,
        severity: f64,
        duration_days: u32,
        start_day: u32,
    ) -> ScenarioResult<Self> {
        if duration_days == 0 {
            return Err(ScenarioError::ZeroDuration);
        }
        if !severity.is_finite() {
            return Err(ScenarioError::InvalidSeverity(severity));
        }
        Ok(Self {
            kind,
            severity: severity.clamp(0.0, 1.0),
            duration_days,
            start_day,
        })
    }
}
