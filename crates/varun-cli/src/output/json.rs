use serde::Serialize;
use serde_json::json;
use varun_core::error::VarunError;
use varun_core::outcome::RechargeReport;
use varun_core::trace::AssessmentTrace;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), VarunError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Print the report alone, or wrapped with its trace when one was requested.
pub fn print_assessment(
    report: &RechargeReport,
    trace: Option<&AssessmentTrace>,
) -> Result<(), VarunError> {
    match trace {
        Some(trace) => print(&json!({ "report": report, "trace": trace })),
        None => print(report),
    }
}
