pub mod assess;
pub mod dataset;
pub mod feasibility;
pub mod schema;
pub mod structure;

use crate::SchemaArgs;
use varun_core::error::VarunError;
use varun_core::schema::builtin;
use varun_core::schema::definition::DatasetSchema;

/// Pick the dataset layout: a custom file wins over the named preset.
pub fn resolve_schema(args: &SchemaArgs) -> Result<DatasetSchema, VarunError> {
    match &args.schema_file {
        Some(path) => varun_core::schema::load_schema(path),
        None => builtin::load_preset(&args.preset),
    }
}
