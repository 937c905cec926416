use varun_core::error::VarunError;
use varun_core::feasibility::{assess_feasibility, FeasibilityInput, SoilType};

use crate::output;

pub fn run(roof_area: f64, rainfall: f64, soil: &str, output_format: &str) -> Result<(), VarunError> {
    let input = FeasibilityInput {
        roof_area_sqft: roof_area,
        annual_rainfall_mm: rainfall,
        soil: SoilType::from_str_loose(soil),
    };
    let report = assess_feasibility(&input)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_feasibility(&input, &report),
    }

    Ok(())
}
