use crate::classify::{AquiferClass, DepthClass, PermeabilityClass, RechargeVerdict};
use crate::explain::Explanation;
use crate::model::{AquiferRef, NearestMatch};
use crate::structure::StructureType;
use serde::{Deserialize, Serialize};

/// Full result of one recharge assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Closest dataset record and its unrounded distance.
    pub nearest: NearestMatch,
    pub depth_class: DepthClass,
    pub aquifer: AquiferClass,
    pub verdict: RechargeVerdict,
    pub explanation: Explanation,
    /// Structure suggested for the record's depth.
    pub structure: StructureType,
}

/// Flat, client-facing form of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargeReport {
    /// Coordinates of the matched dataset record.
    pub latitude: f64,
    pub longitude: f64,
    pub groundwater_level_m_bgl: f64,
    pub aquifer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aquifer_code: Option<i64>,
    pub soil_permeability_class: PermeabilityClass,
    pub depth_class: DepthClass,
    pub recharge_potential: RechargeVerdict,
    pub short_reason: String,
    pub details: String,
    /// Distance to the matched record, rounded to 2 decimals.
    pub distance_km: f64,
    pub recommended_structure: StructureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AssessmentResult {
    pub fn to_report(&self) -> RechargeReport {
        let record = &self.nearest.record;
        let aquifer_code = match record.aquifer {
            AquiferRef::Code(code) => Some(code),
            _ => None,
        };

        RechargeReport {
            latitude: record.latitude,
            longitude: record.longitude,
            groundwater_level_m_bgl: record.groundwater_level,
            aquifer: self.aquifer.material.clone(),
            aquifer_code,
            soil_permeability_class: self.aquifer.permeability,
            depth_class: self.depth_class,
            recharge_potential: self.verdict,
            short_reason: self.explanation.short_text.clone(),
            details: self.explanation.long_text.clone(),
            distance_km: round_2(self.nearest.distance_km),
            recommended_structure: self.structure,
            label: record.label.clone(),
        }
    }
}

fn round_2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
