use crate::classify::depth::DEPTH_CLASS_BOUNDS;
use crate::dataset::Dataset;
use crate::model::{AquiferRef, Query};
use crate::outcome::AssessmentResult;
use serde::{Deserialize, Serialize};

pub const TRACE_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceSeverity {
    Important,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStepType {
    Locate,
    DepthClass,
    AquiferResolution,
    MatrixLookup,
    StructureChoice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceStep {
    pub step_type: TraceStepType,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceWarning {
    pub message: String,
    pub severity: TraceSeverity,
}

/// Step-by-step record of how an assessment was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentTrace {
    pub trace_schema_version: String,
    pub query: Query,
    pub steps: Vec<TraceStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TraceWarning>,
}

pub fn build_trace(query: &Query, result: &AssessmentResult, dataset: &Dataset) -> AssessmentTrace {
    let record = &result.nearest.record;
    let level = record.groundwater_level;

    let steps = vec![
        TraceStep {
            step_type: TraceStepType::Locate,
            message: format!(
                "Scanned {} record(s); nearest at ({}, {}) is {:.3} km away",
                dataset.records.len(),
                record.latitude,
                record.longitude,
                result.nearest.distance_km
            ),
        },
        TraceStep {
            step_type: TraceStepType::DepthClass,
            message: format!(
                "Groundwater level {}m bgl -> {} ({}); class bounds {:?}",
                level,
                result.depth_class,
                result.depth_class.descriptor(),
                DEPTH_CLASS_BOUNDS
            ),
        },
        TraceStep {
            step_type: TraceStepType::AquiferResolution,
            message: format!(
                "Aquifer {} -> {} ({} permeability)",
                record.aquifer, result.aquifer.material, result.aquifer.permeability
            ),
        },
        TraceStep {
            step_type: TraceStepType::MatrixLookup,
            message: format!(
                "Matrix[{}][{}] -> {}",
                result.depth_class, result.aquifer.permeability, result.verdict
            ),
        },
        TraceStep {
            step_type: TraceStepType::StructureChoice,
            message: format!("Aquifer depth {}m -> {}", level, result.structure),
        },
    ];

    let mut warnings = Vec::new();

    if result.aquifer.defaulted {
        let message = match &record.aquifer {
            AquiferRef::Code(code) => format!(
                "Aquifer code {} is not in the code table; assumed {} ({} permeability)",
                code, result.aquifer.material, result.aquifer.permeability
            ),
            AquiferRef::Material(name) => format!(
                "Material '{}' is not recognized; assumed {} permeability",
                name, result.aquifer.permeability
            ),
            AquiferRef::Unknown => format!(
                "Record has no aquifer information; assumed {} ({} permeability)",
                result.aquifer.material, result.aquifer.permeability
            ),
        };
        warnings.push(TraceWarning {
            message,
            severity: TraceSeverity::Important,
        });
    }

    if !dataset.skipped.is_empty() {
        warnings.push(TraceWarning {
            message: format!(
                "{} dataset row(s) failed to parse and were not considered",
                dataset.skipped.len()
            ),
            severity: TraceSeverity::Info,
        });
    }

    AssessmentTrace {
        trace_schema_version: TRACE_SCHEMA_VERSION.to_string(),
        query: *query,
        steps,
        warnings,
    }
}
