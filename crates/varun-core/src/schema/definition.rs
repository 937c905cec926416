use serde::{Deserialize, Serialize};

/// Column layout of a delimited groundwater dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSchema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Rows skipped before data starts.
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    pub columns: ColumnMap,
}

/// 0-based field positions for each record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub latitude: usize,
    pub longitude: usize,
    /// Groundwater level / aquifer depth in meters below ground.
    pub depth: usize,
    /// Numeric geological code. Takes precedence over `material` when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aquifer_code: Option<usize>,
    /// Material name (e.g. "alluvium").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<usize>,
}

impl ColumnMap {
    /// All mapped columns as (role, index) pairs.
    pub fn roles(&self) -> Vec<(&'static str, usize)> {
        let mut roles = vec![
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("depth", self.depth),
        ];
        let optional = [
            ("aquifer_code", self.aquifer_code),
            ("material", self.material),
            ("label", self.label),
        ];
        roles.extend(optional.into_iter().filter_map(|(role, idx)| idx.map(|i| (role, i))));
        roles
    }

    /// Minimum number of fields a row needs for the required columns.
    pub fn required_width(&self) -> usize {
        self.latitude.max(self.longitude).max(self.depth) + 1
    }
}

fn default_header_rows() -> usize {
    1
}

fn default_delimiter() -> char {
    ','
}
