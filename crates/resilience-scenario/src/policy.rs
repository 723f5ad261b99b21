use serde::{Deserialize, Serialize};

use crate::error::{ScenarioError, ScenarioResult};

/// Recovery levers available to the disrupted system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Buffer inventory as a fraction of demand, in [0.0, 1.0].
    pub safety_stock: f64,
    pub expediting: bool,
    pub overtime: bool,
    pub dual_sourcing: bool,
    pub rerouting: bool,
}

/// Multiplicative effect of a policy on the disruption.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyEffects {
    /// Scales the depth of the performance drop.
    pub depth_mult: f64,
    /// Scales the modeled time to recover.
    pub ttr_mult: f64,
    /// Relative cost of running the policy.
    pub cost_proxy: f64,
}

impl Policy {
    /// Do-nothing policy.
    pub fn none() -> Self {
        Self::default()
    }

    /// Safety stock is clamped to [0, 1].
    pub fn with_safety_stock(mut self, safety_stock: f64) -> ScenarioResult<Self> {
        if !safety_stock.is_finite() {
            return Err(ScenarioError::InvalidSafetyStock(safety_stock));
        }
        self.safety_stock = safety_stock.clamp(0.0, 1.0);
        Ok(self)
    }

    pub fn with_expediting(mut self) -> Self {
        self.expediting = true;
        self
    }

    pub fn with_overtime(mut self) -> Self {
        self.overtime = true;
        self
    }

    pub fn with_dual_sourcing(mut self) -> Self {
        self.dual_sourcing = true;
        self
    }

    pub fn with_rerouting(mut self) -> Self {
        self.rerouting = true;
        self
    }

    pub fn effects(&self) -> PolicyEffects {
        let mut depth_mult = 1.0;
        let mut ttr_mult = 1.0;
        let mut cost_proxy = 0.0;

        if self.safety_stock > 0.0 {
            depth_mult *= 1.0 - 0.6 * self.safety_stock;
            cost_proxy += 0.4 * self.safety_stock;
        }
        if self.dual_sourcing {
            depth_mult *= 0.75;
            ttr_mult *= 0.80;
            cost_proxy += 0.15;
        }
        if self.rerouting {
            ttr_mult *= 0.90;
            cost_proxy += 0.10;
        }
        if self.expediting {
            ttr_mult *= 0.75;
            cost_proxy += 0.35;
        }
        if self.overtime {
            ttr_mult *= 0.85;
            cost_proxy += 0.25;
        }

        PolicyEffects {
            depth_mult,
            ttr_mult,
            cost_proxy,
        }
    }
}
