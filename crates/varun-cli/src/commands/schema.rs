use std::path::Path;
use varun_core::error::VarunError;
use varun_core::schema::builtin;
use varun_core::schema::definition::DatasetSchema;

pub fn list() -> Result<(), VarunError> {
    println!("Available dataset layouts:\n");
    for name in builtin::PRESETS {
        let schema = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!("  {:<14} {} (v{}){}", name, schema.name, schema.version, default_marker);
        if let Some(ref desc) = schema.description {
            println!("                 {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), VarunError> {
    let schema = builtin::load_preset(preset)?;

    println!("{} (version {})\n", schema.name, schema.version);
    if let Some(ref desc) = schema.description {
        println!("{}\n", desc);
    }

    print_layout(&schema);

    match (schema.columns.aquifer_code, schema.columns.material) {
        (Some(_), _) => {
            println!("Aquifer codes are mapped to a material through the geology code table.");
            println!("Codes missing from the table are treated as hard rock.\n");
        }
        (None, Some(_)) => {
            println!("Aquifer material names are matched case-insensitively.");
            println!("Unrecognized names are treated as medium permeability.\n");
        }
        (None, None) => {
            println!("No aquifer column: every record is treated as hard rock.\n");
        }
    }

    println!("Rows with a missing or non-numeric coordinate or depth are skipped.");
    println!("Run `varun dataset inspect <file> --schema {preset}` to list them.\n");

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), VarunError> {
    let schema = varun_core::schema::load_schema(file)?;

    println!("Layout '{}' (v{}) is valid.\n", schema.name, schema.version);
    print_layout(&schema);

    let mut warnings = Vec::new();
    if schema.columns.aquifer_code.is_none() && schema.columns.material.is_none() {
        warnings.push("no aquifer_code or material column; all records will default to hard rock".to_string());
    }
    if schema.columns.aquifer_code.is_some() && schema.columns.material.is_some() {
        warnings.push("both aquifer_code and material are mapped; the code takes precedence".to_string());
    }
    if schema.header_rows == 0 {
        warnings.push("header_rows is 0; a header line would be reported as a skipped row".to_string());
    }

    if !warnings.is_empty() {
        println!("Warnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
        println!();
    }

    Ok(())
}

fn print_layout(schema: &DatasetSchema) {
    let delimiter = match schema.delimiter {
        '\t' => "tab".to_string(),
        c => format!("'{c}'"),
    };
    println!("  Header rows: {}", schema.header_rows);
    println!("  Delimiter:   {}\n", delimiter);

    println!("  {:<14} Column", "Field");
    println!("  {}", "-".repeat(22));
    let mut roles = schema.columns.roles();
    roles.sort_by_key(|(_, idx)| *idx);
    for (role, idx) in roles {
        println!("  {:<14} {}", role, idx);
    }
    println!();
}
