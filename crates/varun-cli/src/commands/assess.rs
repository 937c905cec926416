use std::path::PathBuf;
use varun_core::dataset::DatasetCache;
use varun_core::error::VarunError;
use varun_core::model::Query;
use varun_core::trace::build_trace;

use crate::output;
use crate::SchemaArgs;

pub fn run(
    lat: Option<&str>,
    lon: Option<&str>,
    dataset_path: PathBuf,
    schema_args: &SchemaArgs,
    output_format: &str,
    with_trace: bool,
) -> Result<(), VarunError> {
    // Validate the request before touching the dataset.
    let query = Query::from_params(lat, lon)?;
    let schema = super::resolve_schema(schema_args)?;

    let cache = DatasetCache::new(dataset_path, schema);
    let result = varun_core::assess_cached(&query, &cache)?;
    let trace = if with_trace {
        // Already loaded by the assessment; this is the cached copy.
        let dataset = cache.get()?;
        Some(build_trace(&query, &result, &dataset))
    } else {
        None
    };

    match output_format {
        "json" => output::json::print_assessment(&result.to_report(), trace.as_ref())?,
        _ => output::table::print_assessment(&query, &result, trace.as_ref()),
    }

    Ok(())
}
