//! Risk threshold
//!
//! A single fixed cutoff. A probability strictly above it is high risk;
//! exactly 0.5 is still low risk.

use serde::{Deserialize, Serialize};

/// Default decision cutoff
pub const RISK_THRESHOLD: f32 = 0.5;

/// Display branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Low,
}

/// Threshold configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThreshold {
    pub cutoff: f32,
}

impl Default for RiskThreshold {
    fn default() -> Self {
        Self { cutoff: RISK_THRESHOLD }
    }
}

impl RiskThreshold {
    pub fn new(cutoff: f32) -> Self {
        Self { cutoff }
    }

    /// `probability > cutoff` is high risk
    pub fn classify(&self, probability: f32) -> RiskLevel {
        if probability > self.cutoff {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}
