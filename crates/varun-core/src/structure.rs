//! Recharge structure choice and aquifer-depth feasibility rules.
//!
//! These thresholds are independent of [`crate::classify::depth`]; the two
//! sets must not be merged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shallowest aquifer depth (m) at which any structure is recommended.
pub const MIN_STRUCTURE_DEPTH_M: f64 = 3.0;
/// Deepest aquifer depth (m) still served by a pit.
pub const MAX_PIT_DEPTH_M: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureType {
    #[serde(rename = "Recharge Pit")]
    RechargePit,
    #[serde(rename = "Recharge Shaft")]
    RechargeShaft,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl StructureType {
    pub fn as_str(self) -> &'static str {
        match self {
            StructureType::RechargePit => "Recharge Pit",
            StructureType::RechargeShaft => "Recharge Shaft",
            StructureType::NotRecommended => "Not Recommended",
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick a recharge structure for an aquifer depth in meters.
///
/// `[3, 10]` -> pit, `> 10` -> shaft, `< 3` -> not recommended. NaN is
/// not recommended.
pub fn recommend_structure(depth: f64) -> StructureType {
    if depth > MAX_PIT_DEPTH_M {
        StructureType::RechargeShaft
    } else if depth >= MIN_STRUCTURE_DEPTH_M {
        StructureType::RechargePit
    } else {
        StructureType::NotRecommended
    }
}

/// Two aquifer feasibility rules that disagree on direction.
///
/// Both are in use by different clients. `A` treats shallow aquifers
/// (`depth < 3`) as feasible, `B` treats `depth >= 3` as feasible. They
/// give opposite answers for every finite depth, so neither is applied
/// implicitly. A NaN depth is infeasible under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AquiferFeasibilityPolicy {
    A,
    B,
}

/// Depth (m) both policies split on.
pub const FEASIBILITY_SPLIT_DEPTH_M: f64 = 3.0;

impl AquiferFeasibilityPolicy {
    pub fn is_feasible(self, depth: f64) -> bool {
        match self {
            AquiferFeasibilityPolicy::A => depth < FEASIBILITY_SPLIT_DEPTH_M,
            AquiferFeasibilityPolicy::B => depth >= FEASIBILITY_SPLIT_DEPTH_M,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            AquiferFeasibilityPolicy::A => "feasible when aquifer depth < 3 m",
            AquiferFeasibilityPolicy::B => "feasible when aquifer depth >= 3 m",
        }
    }
}

/// Both policy verdicts for one depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyComparison {
    pub policy_a: bool,
    pub policy_b: bool,
    pub disagree: bool,
}

pub fn check_both(depth: f64) -> PolicyComparison {
    let policy_a = AquiferFeasibilityPolicy::A.is_feasible(depth);
    let policy_b = AquiferFeasibilityPolicy::B.is_feasible(depth);
    PolicyComparison {
        policy_a,
        policy_b,
        disagree: policy_a != policy_b,
    }
}
