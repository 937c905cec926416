use crate::model::{AquiferRef, GeoRecord};
use crate::schema::definition::ColumnMap;

/// Why a dataset row was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("row has {found} field(s), {column} expects index {index}")]
    MissingField {
        column: &'static str,
        index: usize,
        found: usize,
    },

    #[error("{column} '{value}' is not a number")]
    NotANumber { column: &'static str, value: String },

    #[error("{column} is not finite")]
    NonFinite { column: &'static str },

    #[error("{column} {value} is out of range")]
    OutOfRange { column: &'static str, value: f64 },

    #[error("depth {0} is negative")]
    NegativeDepth(f64),
}

/// Split one delimited line into fields.
///
/// Double-quoted fields may contain the delimiter; `""` inside quotes is
/// a literal quote. Fields are returned untrimmed.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    fields
}

/// Decode split fields into a record according to the column map.
pub fn decode_row(fields: &[String], columns: &ColumnMap) -> Result<GeoRecord, RowError> {
    let latitude = required_number(fields, "latitude", columns.latitude)?;
    let longitude = required_number(fields, "longitude", columns.longitude)?;
    let groundwater_level = required_number(fields, "depth", columns.depth)?;

    if latitude.abs() > 90.0 {
        return Err(RowError::OutOfRange {
            column: "latitude",
            value: latitude,
        });
    }
    if longitude.abs() > 180.0 {
        return Err(RowError::OutOfRange {
            column: "longitude",
            value: longitude,
        });
    }
    if groundwater_level < 0.0 {
        return Err(RowError::NegativeDepth(groundwater_level));
    }

    let aquifer = match (
        columns.aquifer_code.and_then(|i| aquifer_code(fields, i)),
        columns.material.and_then(|i| optional_text(fields, i)),
    ) {
        (Some(code), _) => AquiferRef::Code(code),
        (None, Some(name)) => AquiferRef::Material(name),
        (None, None) => AquiferRef::Unknown,
    };

    Ok(GeoRecord {
        latitude,
        longitude,
        groundwater_level,
        aquifer,
        label: columns.label.and_then(|i| optional_text(fields, i)),
    })
}

fn required_number(fields: &[String], column: &'static str, index: usize) -> Result<f64, RowError> {
    let raw = fields.get(index).ok_or(RowError::MissingField {
        column,
        index,
        found: fields.len(),
    })?;
    let raw = raw.trim();
    let value: f64 = raw.parse().map_err(|_| RowError::NotANumber {
        column,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(RowError::NonFinite { column });
    }
    Ok(value)
}

/// Aquifer codes are kept only when they are finite integers; anything
/// else is treated as absent.
fn aquifer_code(fields: &[String], index: usize) -> Option<i64> {
    let value: f64 = fields.get(index)?.trim().parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn optional_text(fields: &[String], index: usize) -> Option<String> {
    let s = fields.get(index)?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
