use super::definition::DatasetSchema;
use crate::error::VarunError;

const RECHARGE_JSON: &str = include_str!("../../../../data/schemas/recharge.json");
const AQUIFER_CHECK_JSON: &str = include_str!("../../../../data/schemas/aquifer-check.json");

/// Available predefined dataset layouts.
pub const PRESETS: &[&str] = &["recharge", "aquifer-check"];

/// Preset used when none is named.
pub const DEFAULT_PRESET: &str = "recharge";

/// Load a predefined dataset schema by name.
pub fn load_preset(name: &str) -> Result<DatasetSchema, VarunError> {
    let json = match name {
        "recharge" => RECHARGE_JSON,
        "aquifer-check" => AQUIFER_CHECK_JSON,
        _ => {
            return Err(VarunError::SchemaInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    super::parse_schema_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_recharge_preset() {
        let s = load_preset("recharge").unwrap();
        assert_eq!(s.columns.latitude, 0);
        assert_eq!(s.columns.longitude, 1);
        assert_eq!(s.columns.depth, 2);
        assert_eq!(s.columns.aquifer_code, Some(3));
        assert_eq!(s.columns.label, Some(4));
        assert_eq!(s.header_rows, 1);
    }

    #[test]
    fn test_load_aquifer_check_preset() {
        let s = load_preset("aquifer-check").unwrap();
        assert_eq!(s.columns.label, Some(0));
        assert_eq!(s.columns.depth, 6);
        assert_eq!(s.columns.aquifer_code, None);
    }

    #[test]
    fn test_all_presets_load() {
        for name in PRESETS {
            assert!(load_preset(name).is_ok(), "{name}");
        }
        assert!(PRESETS.contains(&DEFAULT_PRESET));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
