use varun_core::dataset::Dataset;
use varun_core::feasibility::{FeasibilityInput, FeasibilityReport};
use varun_core::model::Query;
use varun_core::outcome::AssessmentResult;
use varun_core::trace::{AssessmentTrace, TraceSeverity};

pub fn print_assessment(query: &Query, result: &AssessmentResult, trace: Option<&AssessmentTrace>) {
    let record = &result.nearest.record;

    println!("=== Recharge potential at ({}, {}) ===\n", query.latitude, query.longitude);
    println!("  Potential:  {}", result.verdict);
    println!("  Reason:     {}\n", result.explanation.short_text);

    let location = match record.label {
        Some(ref label) => format!("{} ({}, {})", label, record.latitude, record.longitude),
        None => format!("({}, {})", record.latitude, record.longitude),
    };
    println!("  Nearest record:   {}, {:.2} km away", location, result.nearest.distance_km);
    println!(
        "  Groundwater:      {} m bgl -> {} ({})",
        record.groundwater_level,
        result.depth_class,
        result.depth_class.descriptor()
    );
    let defaulted_marker = if result.aquifer.defaulted { " (?)" } else { "" };
    println!(
        "  Aquifer:          {}{} -> {} permeability",
        result.aquifer.material, defaulted_marker, result.aquifer.permeability
    );
    println!("  Structure:        {}\n", result.structure);

    println!("  {}\n", result.explanation.long_text);

    if let Some(trace) = trace {
        println!("Trace:");
        for step in &trace.steps {
            println!("  - {}", step.message);
        }
        if !trace.warnings.is_empty() {
            println!("\nWarnings:");
            for w in &trace.warnings {
                let marker = match w.severity {
                    TraceSeverity::Important => "!",
                    TraceSeverity::Info => "-",
                };
                println!("  {} {}", marker, w.message);
            }
        }
        println!();
    }
}

pub fn print_dataset(dataset: &Dataset) {
    println!("=== {} ===\n", dataset.schema_name);
    println!("  Usable records: {}", dataset.len());
    println!("  Skipped rows:   {}\n", dataset.skipped.len());

    if !dataset.skipped.is_empty() {
        let width = dataset
            .skipped
            .iter()
            .map(|s| s.line_number.to_string().len())
            .max()
            .unwrap_or(4);
        for s in &dataset.skipped {
            println!("  line {:>width$}  {}", s.line_number, s.reason, width = width);
        }
        println!();
    }

    if dataset.is_empty() {
        return;
    }

    let (min, max) = dataset
        .records
        .iter()
        .map(|r| r.groundwater_level)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    println!("  Depth range: {} - {} m bgl\n", min, max);
}

pub fn print_feasibility(input: &FeasibilityInput, report: &FeasibilityReport) {
    println!(
        "=== Rooftop harvesting: {} sq ft, {} mm/year, {} soil ===\n",
        input.roof_area_sqft, input.annual_rainfall_mm, input.soil
    );
    println!("  Feasibility:       {} ({})", report.feasibility_score, report.status);
    println!("  Harvestable:       {} L/year", report.liters_potential);
    println!("  Recharge:          {} L/year", report.recharge_potential_liters);
    println!("  Tank capacity:     {} L", report.tank_capacity_liters);
    println!("  Recharge pit:      {}", report.recharge_pit_size);
    println!("  Estimated cost:    Rs {}", report.cost_estimation);
    println!("  Payback:           {} months\n", report.roi_months);
    println!("  {}\n", report.system_recommendation);
}
