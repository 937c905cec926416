pub mod classify;
pub mod dataset;
pub mod error;
pub mod explain;
pub mod feasibility;
pub mod geo;
pub mod locate;
pub mod model;
pub mod outcome;
pub mod schema;
pub mod structure;
pub mod trace;

use classify::{evaluate, resolve_aquifer, DepthClass};
use dataset::{Dataset, DatasetCache};
use error::VarunError;
use explain::explain;
use locate::find_nearest;
use model::Query;
use outcome::AssessmentResult;
use structure::recommend_structure;

/// Main API entry point: assess recharge potential at a point.
///
/// Finds the nearest dataset record, classifies its depth and aquifer,
/// looks up the recharge verdict and renders the explanation. Returns
/// `NoMatch` when the dataset has no usable record.
pub fn assess(query: &Query, dataset: &Dataset) -> Result<AssessmentResult, VarunError> {
    let nearest = find_nearest(query, &dataset.records).ok_or(VarunError::NoMatch)?;
    let level = nearest.record.groundwater_level;

    let depth_class = DepthClass::classify(level);
    let aquifer = resolve_aquifer(&nearest.record.aquifer);
    let verdict = evaluate(depth_class, aquifer.permeability);
    let explanation = explain(level, &aquifer.material, aquifer.permeability, verdict);
    let structure = recommend_structure(level);

    if aquifer.defaulted {
        tracing::debug!(
            aquifer = %nearest.record.aquifer,
            material = %aquifer.material,
            "aquifer not in lookup tables, using default"
        );
    }
    tracing::info!(
        lat = query.latitude,
        lon = query.longitude,
        distance_km = nearest.distance_km,
        depth_class = %depth_class,
        verdict = %verdict,
        "recharge potential assessed"
    );

    Ok(AssessmentResult {
        nearest,
        depth_class,
        aquifer,
        verdict,
        explanation,
        structure,
    })
}

/// Assess against a cached dataset, loading it on first use.
pub fn assess_cached(query: &Query, cache: &DatasetCache) -> Result<AssessmentResult, VarunError> {
    let dataset = cache.get()?;
    assess(query, &dataset)
}
