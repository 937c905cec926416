use serde_json::json;
use varun_core::error::VarunError;
use varun_core::structure::{check_both, recommend_structure, AquiferFeasibilityPolicy};

use crate::output;

pub fn run(depth: f64, output_format: &str) -> Result<(), VarunError> {
    if !depth.is_finite() || depth < 0.0 {
        return Err(VarunError::InvalidInput(format!(
            "depth must be a non-negative number, got {depth}"
        )));
    }

    let structure = recommend_structure(depth);
    let policies = check_both(depth);

    match output_format {
        "json" => output::json::print(&json!({
            "depth_m": depth,
            "structure": structure,
            "feasibility": policies,
        }))?,
        _ => {
            println!("  Aquifer depth:  {depth} m");
            println!("  Structure:      {structure}\n");
            println!("  Aquifer feasibility:");
            for (policy, feasible) in [
                (AquiferFeasibilityPolicy::A, policies.policy_a),
                (AquiferFeasibilityPolicy::B, policies.policy_b),
            ] {
                let verdict = if feasible { "feasible" } else { "not feasible" };
                println!("    Policy {policy:?} ({}): {verdict}", policy.describe());
            }
            if policies.disagree {
                println!("\n  Note: policies A and B disagree for this depth.");
            }
        }
    }

    Ok(())
}
