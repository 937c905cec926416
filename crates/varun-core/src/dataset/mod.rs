pub mod cache;
pub mod row;

use crate::error::VarunError;
use crate::model::GeoRecord;
use crate::schema::definition::DatasetSchema;
use row::{decode_row, split_fields};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use cache::DatasetCache;

/// A data row that failed to decode and was left out of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line number in the source file.
    pub line_number: usize,
    pub reason: String,
}

/// Parsed reference dataset. Records keep file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub schema_name: String,
    pub records: Vec<GeoRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Parse dataset text according to a schema.
///
/// Never fails: rows that do not decode are recorded in `skipped` and the
/// rest of the file is still used. Blank lines are ignored.
pub fn parse_dataset(text: &str, schema: &DatasetSchema) -> Dataset {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if idx < schema.header_rows || line.trim().is_empty() {
            continue;
        }
        let line_number = idx + 1;
        let fields = split_fields(line, schema.delimiter);

        match decode_row(&fields, &schema.columns) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::debug!(line = line_number, reason = %e, "skipping dataset row");
                skipped.push(SkippedRow {
                    line_number,
                    reason: e.to_string(),
                });
            }
        }
    }

    Dataset {
        schema_name: schema.name.clone(),
        records,
        skipped,
    }
}

/// Read and parse a dataset file.
///
/// A missing or unreadable file is `DatasetUnavailable`; no partial data
/// is returned in that case.
pub fn load_dataset(path: &Path, schema: &DatasetSchema) -> Result<Dataset, VarunError> {
    let text = std::fs::read_to_string(path).map_err(|e| VarunError::DatasetUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let dataset = parse_dataset(&text, schema);

    tracing::info!(
        path = %path.display(),
        schema = %schema.name,
        records = dataset.records.len(),
        skipped = dataset.skipped.len(),
        "loaded groundwater dataset"
    );
    if !dataset.skipped.is_empty() {
        tracing::warn!(
            path = %path.display(),
            skipped = dataset.skipped.len(),
            "dataset rows failed to parse and were skipped"
        );
    }

    Ok(dataset)
}
