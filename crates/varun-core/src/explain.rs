use crate::classify::{DepthClass, PermeabilityClass, RechargeVerdict};
use serde::{Deserialize, Serialize};

/// Rendered justification for a recharge verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub short_text: String,
    pub long_text: String,
}

/// Closing recommendation for a verdict.
pub fn recommendation(verdict: RechargeVerdict) -> &'static str {
    match verdict {
        RechargeVerdict::VeryHigh | RechargeVerdict::High => {
            "Excellent conditions for rainwater recharge structures."
        }
        RechargeVerdict::Medium => "Moderate conditions suitable for recharge with proper design.",
        RechargeVerdict::Low | RechargeVerdict::VeryLow => {
            "Limited recharge potential, consider alternative water conservation methods."
        }
    }
}

/// Render the short and long explanation for an assessment.
///
/// The depth class is re-derived from `level` so the text always agrees
/// with the thresholds in [`DepthClass::classify`].
pub fn explain(
    level: f64,
    material: &str,
    permeability: PermeabilityClass,
    verdict: RechargeVerdict,
) -> Explanation {
    let depth = DepthClass::classify(level);
    let desc = depth.descriptor();

    let short_text = format!(
        "Groundwater at {level}m depth ({desc}) with {permeability} permeability {material} aquifer."
    );

    let long_text = format!(
        "The site has {desc} groundwater ({code}: {level}m bgl) in {material} aquifer with {permeability} soil permeability. \
         This combination yields {verdict_lower} artificial recharge potential. {closing}",
        code = depth.code(),
        verdict_lower = verdict.as_str().to_lowercase(),
        closing = recommendation(verdict),
    );

    Explanation {
        short_text,
        long_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_template() {
        let e = explain(25.0, "clay", PermeabilityClass::Low, RechargeVerdict::Medium);
        assert_eq!(
            e.short_text,
            "Groundwater at 25m depth (deep) with low permeability clay aquifer."
        );
    }

    #[test]
    fn test_long_text_template() {
        let e = explain(25.0, "clay", PermeabilityClass::Low, RechargeVerdict::Medium);
        assert_eq!(
            e.long_text,
            "The site has deep groundwater (D4: 25m bgl) in clay aquifer with low soil permeability. \
             This combination yields medium artificial recharge potential. \
             Moderate conditions suitable for recharge with proper design."
        );
    }

    #[test]
    fn test_fractional_level_renders_shortest() {
        let e = explain(2.9, "sand", PermeabilityClass::High, RechargeVerdict::VeryLow);
        assert!(e.short_text.starts_with("Groundwater at 2.9m depth (very shallow)"));
        assert!(e.long_text.contains("(D1: 2.9m bgl)"));
        assert!(e.long_text.contains("yields very low artificial recharge potential"));
        assert!(e.long_text.ends_with("consider alternative water conservation methods."));
    }

    #[test]
    fn test_recommendation_split() {
        let excellent = "Excellent conditions for rainwater recharge structures.";
        assert_eq!(recommendation(RechargeVerdict::VeryHigh), excellent);
        assert_eq!(recommendation(RechargeVerdict::High), excellent);
        assert!(recommendation(RechargeVerdict::Medium).starts_with("Moderate"));
        assert!(recommendation(RechargeVerdict::Low).starts_with("Limited"));
        assert!(recommendation(RechargeVerdict::VeryLow).starts_with("Limited"));
    }

    #[test]
    fn test_deterministic() {
        let a = explain(12.5, "hard rock", PermeabilityClass::Medium, RechargeVerdict::Medium);
        let b = explain(12.5, "hard rock", PermeabilityClass::Medium, RechargeVerdict::Medium);
        assert_eq!(a, b);
    }
}
