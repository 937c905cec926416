use super::depth::DepthClass;
use super::permeability::PermeabilityClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Artificial recharge potential, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RechargeVerdict {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RechargeVerdict {
    pub fn as_str(self) -> &'static str {
        match self {
            RechargeVerdict::VeryLow => "Very Low",
            RechargeVerdict::Low => "Low",
            RechargeVerdict::Medium => "Medium",
            RechargeVerdict::High => "High",
            RechargeVerdict::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RechargeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use RechargeVerdict::{High, Low, Medium, VeryHigh, VeryLow};

/// Rows: D1..D5. Columns: low, medium, high permeability.
pub const RECHARGE_MATRIX: [[RechargeVerdict; 3]; 5] = [
    [VeryLow, VeryLow, VeryLow],
    [VeryLow, Low, Medium],
    [Low, Medium, High],
    [Medium, High, VeryHigh],
    [Medium, High, VeryHigh],
];

/// Look up the recharge potential for a depth class and permeability class.
pub fn evaluate(depth: DepthClass, permeability: PermeabilityClass) -> RechargeVerdict {
    RECHARGE_MATRIX[depth.index()][permeability.index()]
}
