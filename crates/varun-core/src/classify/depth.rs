use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal depth-to-groundwater class, shallowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DepthClass {
    D1,
    D2,
    D3,
    D4,
    D5,
}

/// Lower bounds (m bgl) of D2..D5. A level equal to a bound belongs to the upper class.
pub const DEPTH_CLASS_BOUNDS: [f64; 4] = [3.0, 10.0, 20.0, 40.0];

impl DepthClass {
    pub const ALL: [DepthClass; 5] = [
        DepthClass::D1,
        DepthClass::D2,
        DepthClass::D3,
        DepthClass::D4,
        DepthClass::D5,
    ];

    /// Classify a groundwater level in meters below ground.
    ///
    /// Total: anything not below a bound (including NaN) falls through to D5.
    pub fn classify(level: f64) -> DepthClass {
        if level < DEPTH_CLASS_BOUNDS[0] {
            DepthClass::D1
        } else if level < DEPTH_CLASS_BOUNDS[1] {
            DepthClass::D2
        } else if level < DEPTH_CLASS_BOUNDS[2] {
            DepthClass::D3
        } else if level < DEPTH_CLASS_BOUNDS[3] {
            DepthClass::D4
        } else {
            DepthClass::D5
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            DepthClass::D1 => "D1",
            DepthClass::D2 => "D2",
            DepthClass::D3 => "D3",
            DepthClass::D4 => "D4",
            DepthClass::D5 => "D5",
        }
    }

    /// Qualitative descriptor used in explanations.
    pub fn descriptor(self) -> &'static str {
        match self {
            DepthClass::D1 => "very shallow",
            DepthClass::D2 => "shallow",
            DepthClass::D3 => "moderate",
            DepthClass::D4 => "deep",
            DepthClass::D5 => "very deep",
        }
    }
}

impl fmt::Display for DepthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
