use crate::error::VarunError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a dataset row identifies its aquifer material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AquiferRef {
    /// Numeric geological code, resolved through the code table.
    Code(i64),
    /// Material name given directly in the dataset.
    Material(String),
    Unknown,
}

impl fmt::Display for AquiferRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AquiferRef::Code(c) => write!(f, "code {c}"),
            AquiferRef::Material(m) => write!(f, "{m}"),
            AquiferRef::Unknown => write!(f, "unknown"),
        }
    }
}

/// One row of the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters below ground level.
    pub groundwater_level: f64,
    pub aquifer: AquiferRef,
    /// Optional place name (village, well id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A caller-supplied point to assess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub latitude: f64,
    pub longitude: f64,
}

impl Query {
    pub fn new(latitude: f64, longitude: f64) -> Result<Query, VarunError> {
        check_coordinate("latitude", latitude, 90.0)?;
        check_coordinate("longitude", longitude, 180.0)?;
        Ok(Query {
            latitude,
            longitude,
        })
    }

    /// Build a query from raw request parameters.
    ///
    /// Both parameters are required and must parse as finite numbers
    /// within WGS-84 range.
    pub fn from_params(latitude: Option<&str>, longitude: Option<&str>) -> Result<Query, VarunError> {
        let lat = parse_param("latitude", latitude)?;
        let lon = parse_param("longitude", longitude)?;
        Query::new(lat, lon)
    }
}

fn parse_param(name: &str, raw: Option<&str>) -> Result<f64, VarunError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(VarunError::InvalidInput(format!("{name} is required")));
    };
    raw.parse::<f64>()
        .map_err(|_| VarunError::InvalidInput(format!("{name} '{raw}' is not a number")))
}

fn check_coordinate(name: &str, value: f64, limit: f64) -> Result<(), VarunError> {
    if !value.is_finite() {
        return Err(VarunError::InvalidInput(format!("{name} must be a finite number")));
    }
    if value.abs() > limit {
        return Err(VarunError::InvalidInput(format!(
            "{name} {value} is out of range (-{limit}..={limit})"
        )));
    }
    Ok(())
}

/// The closest dataset record to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestMatch {
    pub record: GeoRecord,
    pub distance_km: f64,
}
