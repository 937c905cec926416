//! Aquifer material and soil permeability lookup.
//!
//! Two fixed tables: geological code -> material, and material name ->
//! permeability class. Unknown codes fall back to [`DEFAULT_MATERIAL`]
//! and unknown material names to [`PermeabilityClass::Medium`]. Neither
//! fallback is an error, so a mistyped code in the dataset silently
//! yields a hard-rock/medium classification.

use crate::model::AquiferRef;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermeabilityClass {
    Low,
    Medium,
    High,
}

impl PermeabilityClass {
    pub const ALL: [PermeabilityClass; 3] = [
        PermeabilityClass::Low,
        PermeabilityClass::Medium,
        PermeabilityClass::High,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PermeabilityClass::Low => "low",
            PermeabilityClass::Medium => "medium",
            PermeabilityClass::High => "high",
        }
    }
}

impl fmt::Display for PermeabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known aquifer materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Alluvium,
    Sand,
    Gravel,
    Sandy,
    HardRock,
    Limestone,
    Granite,
    Basalt,
    Clay,
    Shale,
    Clayey,
}

pub const DEFAULT_MATERIAL: Material = Material::HardRock;

const CODE_TABLE: &[(i64, Material)] = &[
    (6, Material::Alluvium),
    (7, Material::Sand),
    (8, Material::Sand),
    (10, Material::HardRock),
    (11, Material::HardRock),
    (12, Material::Granite),
    (15, Material::Alluvium),
    (17, Material::Limestone),
    (18, Material::Limestone),
    (19, Material::Sand),
    (20, Material::HardRock),
    (33, Material::Alluvium),
];

const MATERIAL_TABLE: &[(Material, &str, PermeabilityClass)] = &[
    (Material::Alluvium, "alluvium", PermeabilityClass::High),
    (Material::Sand, "sand", PermeabilityClass::High),
    (Material::Gravel, "gravel", PermeabilityClass::High),
    (Material::Sandy, "sandy", PermeabilityClass::High),
    (Material::HardRock, "hard rock", PermeabilityClass::Medium),
    (Material::Limestone, "limestone", PermeabilityClass::Medium),
    (Material::Granite, "granite", PermeabilityClass::Medium),
    (Material::Basalt, "basalt", PermeabilityClass::Medium),
    (Material::Clay, "clay", PermeabilityClass::Low),
    (Material::Shale, "shale", PermeabilityClass::Low),
    (Material::Clayey, "clayey", PermeabilityClass::Low),
];

impl Material {
    /// Exact code lookup, `None` for codes outside the table.
    pub fn from_code(code: i64) -> Option<Material> {
        CODE_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, m)| *m)
    }

    /// Case-insensitive name lookup; surrounding whitespace ignored.
    pub fn from_name(name: &str) -> Option<Material> {
        let lower = name.trim().to_lowercase();
        MATERIAL_TABLE
            .iter()
            .find(|(_, n, _)| *n == lower)
            .map(|(m, _, _)| *m)
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn permeability(self) -> PermeabilityClass {
        self.entry().2
    }

    fn entry(self) -> &'static (Material, &'static str, PermeabilityClass) {
        // MATERIAL_TABLE is laid out in enum declaration order.
        &MATERIAL_TABLE[self as usize]
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Material for a geological code, falling back to the default material.
pub fn material_for_code(code: i64) -> Material {
    Material::from_code(code).unwrap_or(DEFAULT_MATERIAL)
}

/// Permeability class for a geological code (code -> material -> class).
pub fn permeability_class(code: i64) -> PermeabilityClass {
    material_for_code(code).permeability()
}

/// Permeability for a free-form material name; unrecognized names are medium.
pub fn permeability_for_name(name: &str) -> PermeabilityClass {
    Material::from_name(name)
        .map(Material::permeability)
        .unwrap_or(PermeabilityClass::Medium)
}

/// How an aquifer reference was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AquiferClass {
    /// Display name of the material.
    pub material: String,
    pub permeability: PermeabilityClass,
    /// True when a default was substituted for an unknown code, name or missing value.
    pub defaulted: bool,
}

/// Resolve a dataset aquifer reference into material and permeability.
pub fn resolve_aquifer(aquifer: &AquiferRef) -> AquiferClass {
    match aquifer {
        AquiferRef::Code(code) => {
            let known = Material::from_code(*code);
            let material = known.unwrap_or(DEFAULT_MATERIAL);
            AquiferClass {
                material: material.name().to_string(),
                permeability: material.permeability(),
                defaulted: known.is_none(),
            }
        }
        AquiferRef::Material(name) => {
            let known = Material::from_name(name);
            AquiferClass {
                material: name.trim().to_lowercase(),
                permeability: permeability_for_name(name),
                defaulted: known.is_none(),
            }
        }
        AquiferRef::Unknown => AquiferClass {
            material: DEFAULT_MATERIAL.name().to_string(),
            permeability: DEFAULT_MATERIAL.permeability(),
            defaulted: true,
        },
    }
}
