use std::path::Path;
use varun_core::dataset::load_dataset;
use varun_core::error::VarunError;

use crate::output;
use crate::SchemaArgs;

pub fn inspect(file: &Path, schema_args: &SchemaArgs, output_format: &str) -> Result<(), VarunError> {
    let schema = super::resolve_schema(schema_args)?;
    let dataset = load_dataset(file, &schema)?;

    match output_format {
        "json" => output::json::print(&dataset)?,
        _ => output::table::print_dataset(&dataset),
    }

    if dataset.is_empty() {
        eprintln!("warning: no usable records; assessments against this file will find no data");
    }

    Ok(())
}
