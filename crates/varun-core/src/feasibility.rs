//! Rooftop rainwater harvesting estimate.
//!
//! Volumes are liters per year for a roof area in square feet and annual
//! rainfall in millimetres. Costs are in rupees.

use crate::error::VarunError;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Concrete roof runoff coefficient.
pub const RUNOFF_COEFFICIENT: f64 = 0.85;
/// Unit factor applied to sq ft x mm.
pub const VOLUME_FACTOR: f64 = 0.0254;
/// Percolation rate (mm/h) that counts as full recharge.
pub const REFERENCE_PERCOLATION: f64 = 25.0;
/// Tanker water price in rupees per liter.
pub const TANKER_PRICE_PER_LITER: f64 = 0.2;
/// Payback reported when the system saves nothing.
pub const MAX_ROI_MONTHS: u32 = 120;

const BASE_COST_RUPEES: i64 = 15_000;
const COST_PER_SQFT_RUPEES: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Rocky,
    Other,
}

impl SoilType {
    pub fn from_str_loose(s: &str) -> SoilType {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("clay") {
            SoilType::Clay
        } else if lower.starts_with("sand") {
            SoilType::Sandy
        } else if lower.starts_with("loam") {
            SoilType::Loamy
        } else if lower.starts_with("rock") {
            SoilType::Rocky
        } else {
            SoilType::Other
        }
    }

    /// Percolation rate in mm/hour.
    pub fn percolation_rate(self) -> f64 {
        match self {
            SoilType::Clay => 2.5,
            SoilType::Sandy => 25.0,
            SoilType::Loamy => 13.0,
            SoilType::Rocky => 0.5,
            SoilType::Other => 10.0,
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilType::Clay => write!(f, "clay"),
            SoilType::Sandy => write!(f, "sandy"),
            SoilType::Loamy => write!(f, "loamy"),
            SoilType::Rocky => write!(f, "rocky"),
            SoilType::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityStatus {
    NotFeasible,
    ModeratelyFeasible,
    Feasible,
    HighlyFeasible,
}

impl FeasibilityStatus {
    /// Bucket a 0-100 feasibility score.
    pub fn from_score(score: f64) -> FeasibilityStatus {
        if score >= 75.0 {
            FeasibilityStatus::HighlyFeasible
        } else if score >= 50.0 {
            FeasibilityStatus::Feasible
        } else if score >= 25.0 {
            FeasibilityStatus::ModeratelyFeasible
        } else {
            FeasibilityStatus::NotFeasible
        }
    }
}

impl fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeasibilityStatus::NotFeasible => write!(f, "not feasible"),
            FeasibilityStatus::ModeratelyFeasible => write!(f, "moderately feasible"),
            FeasibilityStatus::Feasible => write!(f, "feasible"),
            FeasibilityStatus::HighlyFeasible => write!(f, "highly feasible"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityInput {
    pub roof_area_sqft: f64,
    pub annual_rainfall_mm: f64,
    pub soil: SoilType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// 0-100, rounded to 2 decimals.
    pub feasibility_score: f64,
    pub status: FeasibilityStatus,
    pub liters_potential: f64,
    pub recharge_potential_liters: f64,
    pub cost_estimation: Decimal,
    pub roi_months: u32,
    pub tank_capacity_liters: f64,
    pub recharge_pit_size: String,
    pub system_recommendation: String,
}

pub fn assess_feasibility(input: &FeasibilityInput) -> Result<FeasibilityReport, VarunError> {
    let area = input.roof_area_sqft;
    let rainfall = input.annual_rainfall_mm;

    if !area.is_finite() || area <= 0.0 {
        return Err(VarunError::InvalidInput(format!(
            "roof area must be a positive number, got {area}"
        )));
    }
    if !rainfall.is_finite() || rainfall < 0.0 {
        return Err(VarunError::InvalidInput(format!(
            "annual rainfall cannot be negative, got {rainfall}"
        )));
    }

    let liters = area * rainfall * RUNOFF_COEFFICIENT * VOLUME_FACTOR;
    let recharge = liters * (input.soil.percolation_rate() / REFERENCE_PERCOLATION);
    let score = (liters / 100.0 + recharge / 50.0).min(100.0);

    let area_dec = Decimal::from_f64(area).ok_or_else(|| {
        VarunError::InvalidInput(format!("roof area {area} cannot be represented"))
    })?;
    let cost = (Decimal::from(BASE_COST_RUPEES) + area_dec * Decimal::from(COST_PER_SQFT_RUPEES))
        .round_dp(2);

    let monthly_savings = liters / 12.0 * TANKER_PRICE_PER_LITER;
    let roi_months = if monthly_savings > 0.0 {
        let cost_f = cost.to_f64().unwrap_or(f64::MAX);
        (cost_f / monthly_savings).floor().min(u32::MAX as f64) as u32
    } else {
        MAX_ROI_MONTHS
    };

    let status = FeasibilityStatus::from_score(score);
    tracing::debug!(area, rainfall, soil = %input.soil, score, %status, "feasibility estimate");

    Ok(FeasibilityReport {
        feasibility_score: round_2(score),
        status,
        liters_potential: round_2(liters),
        recharge_potential_liters: round_2(recharge),
        cost_estimation: cost,
        roi_months,
        tank_capacity_liters: round_2(liters * 0.1),
        recharge_pit_size: format!("{}sq ft x 6ft deep", (area * 0.05).floor() as i64),
        system_recommendation:
            "Rooftop Rainwater Harvesting with Underground Tank and Recharge Pit".to_string(),
    })
}

fn round_2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn input(area: f64, rainfall: f64, soil: SoilType) -> FeasibilityInput {
        FeasibilityInput {
            roof_area_sqft: area,
            annual_rainfall_mm: rainfall,
            soil,
        }
    }

    #[test]
    fn test_sandy_roof() {
        // 1000 sq ft, 800 mm: 1000 * 800 * 0.85 * 0.0254 = 17272 L
        let r = assess_feasibility(&input(1000.0, 800.0, SoilType::Sandy)).unwrap();
        assert_relative_eq!(r.liters_potential, 17272.0, epsilon = 1e-6);
        assert_relative_eq!(r.recharge_potential_liters, 17272.0, epsilon = 1e-6);
        assert_eq!(r.feasibility_score, 100.0);
        assert_eq!(r.status, FeasibilityStatus::HighlyFeasible);
        assert_eq!(r.cost_estimation, dec!(65000));
        // 65000 / (17272 / 12 * 0.2) = 225.79
        assert_eq!(r.roi_months, 225);
        assert_relative_eq!(r.tank_capacity_liters, 1727.2, epsilon = 1e-6);
        assert_eq!(r.recharge_pit_size, "50sq ft x 6ft deep");
    }

    #[test]
    fn test_clay_scales_recharge() {
        let r = assess_feasibility(&input(100.0, 100.0, SoilType::Clay)).unwrap();
        // 100 * 100 * 0.85 * 0.0254 = 215.9 L, recharge = 215.9 * 0.1 = 21.59
        assert_relative_eq!(r.liters_potential, 215.9, epsilon = 1e-9);
        assert_relative_eq!(r.recharge_potential_liters, 21.59, epsilon = 1e-9);
        // 2.159 + 0.4318 = 2.5908
        assert_relative_eq!(r.feasibility_score, 2.59, epsilon = 1e-9);
        assert_eq!(r.status, FeasibilityStatus::NotFeasible);
    }

    #[test]
    fn test_zero_rainfall_uses_max_roi() {
        let r = assess_feasibility(&input(500.0, 0.0, SoilType::Loamy)).unwrap();
        assert_eq!(r.liters_potential, 0.0);
        assert_eq!(r.roi_months, MAX_ROI_MONTHS);
        assert_eq!(r.feasibility_score, 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(assess_feasibility(&input(0.0, 800.0, SoilType::Sandy)).is_err());
        assert!(assess_feasibility(&input(-10.0, 800.0, SoilType::Sandy)).is_err());
        assert!(assess_feasibility(&input(100.0, -1.0, SoilType::Sandy)).is_err());
        assert!(assess_feasibility(&input(f64::NAN, 800.0, SoilType::Sandy)).is_err());
    }

    #[test]
    fn test_soil_parsing() {
        assert_eq!(SoilType::from_str_loose("Clayey"), SoilType::Clay);
        assert_eq!(SoilType::from_str_loose("sandy"), SoilType::Sandy);
        assert_eq!(SoilType::from_str_loose(" Loam "), SoilType::Loamy);
        assert_eq!(SoilType::from_str_loose("rocky"), SoilType::Rocky);
        assert_eq!(SoilType::from_str_loose("mixed"), SoilType::Other);
        assert_eq!(SoilType::Other.percolation_rate(), 10.0);
    }

    #[test]
    fn test_status_buckets() {
        assert_eq!(FeasibilityStatus::from_score(75.0), FeasibilityStatus::HighlyFeasible);
        assert_eq!(FeasibilityStatus::from_score(74.99), FeasibilityStatus::Feasible);
        assert_eq!(FeasibilityStatus::from_score(50.0), FeasibilityStatus::Feasible);
        assert_eq!(FeasibilityStatus::from_score(25.0), FeasibilityStatus::ModeratelyFeasible);
        assert_eq!(FeasibilityStatus::from_score(24.9), FeasibilityStatus::NotFeasible);
    }
}
