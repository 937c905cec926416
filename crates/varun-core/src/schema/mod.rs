pub mod builtin;
pub mod definition;

use crate::error::VarunError;
use definition::DatasetSchema;
use std::collections::HashMap;
use std::path::Path;

/// Load a dataset schema from a JSON file.
pub fn load_schema(path: &Path) -> Result<DatasetSchema, VarunError> {
    let content = std::fs::read_to_string(path).map_err(|e| VarunError::SchemaLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_schema(&content, path)
}

/// Parse a dataset schema from a JSON string.
pub fn parse_schema(json: &str, source: &Path) -> Result<DatasetSchema, VarunError> {
    let schema: DatasetSchema = serde_json::from_str(json).map_err(|e| VarunError::SchemaLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_schema(&schema)?;
    Ok(schema)
}

/// Parse a dataset schema from a JSON string (no file path context).
pub fn parse_schema_str(json: &str) -> Result<DatasetSchema, VarunError> {
    let schema: DatasetSchema = serde_json::from_str(json).map_err(VarunError::Json)?;
    validate_schema(&schema)?;
    Ok(schema)
}

/// Validate that a schema is well-formed.
pub fn validate_schema(schema: &DatasetSchema) -> Result<(), VarunError> {
    if schema.name.trim().is_empty() {
        return Err(VarunError::SchemaInvalid("name must not be empty".into()));
    }

    if matches!(schema.delimiter, '"' | '\n' | '\r') {
        return Err(VarunError::SchemaInvalid(format!(
            "delimiter {:?} is not allowed",
            schema.delimiter
        )));
    }

    let mut seen: HashMap<usize, &str> = HashMap::new();
    for (role, idx) in schema.columns.roles() {
        if let Some(other) = seen.insert(idx, role) {
            return Err(VarunError::SchemaInvalid(format!(
                "columns '{}' and '{}' both map to index {}",
                other, role, idx
            )));
        }
    }

    Ok(())
}
