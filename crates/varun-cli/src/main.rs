mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "varun",
    version,
    about = "Groundwater recharge planner for rainwater harvesting"
)]
struct Cli {
    /// Log debug detail (skipped rows, lookup fallbacks) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Dataset layout selection shared by commands that read a dataset.
#[derive(Args)]
pub struct SchemaArgs {
    /// Predefined layout: recharge, aquifer-check
    #[arg(long = "schema", value_name = "NAME", default_value = "recharge")]
    pub preset: String,

    /// Custom JSON layout file (overrides --schema)
    #[arg(long = "schema-file", value_name = "FILE")]
    pub schema_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess artificial recharge potential at a location
    Assess {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<String>,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<String>,

        /// Groundwater dataset (delimited text)
        #[arg(short, long, value_name = "FILE")]
        dataset: PathBuf,

        #[command(flatten)]
        schema: SchemaArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Include the decision trace
        #[arg(long)]
        trace: bool,
    },
    /// Inspect and validate groundwater datasets
    Dataset {
        #[command(subcommand)]
        action: DatasetAction,
    },
    /// Manage and inspect dataset layouts
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
    /// Recommend a recharge structure for an aquifer depth
    Structure {
        /// Aquifer depth in meters below ground
        #[arg(allow_hyphen_values = true)]
        depth: f64,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Estimate rooftop rainwater harvesting feasibility
    Feasibility {
        /// Roof area in square feet
        #[arg(long, value_name = "SQFT")]
        roof_area: f64,

        /// Annual rainfall in millimetres
        #[arg(long, value_name = "MM")]
        rainfall: f64,

        /// Soil type: clay, sandy, loamy, rocky (anything else uses a default rate)
        #[arg(long, default_value = "loamy")]
        soil: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

#[derive(Subcommand)]
enum DatasetAction {
    /// Parse a dataset and report usable and skipped rows
    Inspect {
        /// Path to the dataset file
        file: PathBuf,

        #[command(flatten)]
        schema: SchemaArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

#[derive(Subcommand)]
enum SchemaAction {
    /// List predefined layouts
    List,
    /// Explain a layout in plain language
    Explain {
        /// Preset name (e.g., "recharge")
        preset: String,
    },
    /// Validate a custom layout file
    Validate {
        /// Path to JSON layout file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "varun=debug,varun_core=debug,warn"
    } else {
        "varun=info,varun_core=info,warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Assess {
            lat,
            lon,
            dataset,
            schema,
            output,
            trace,
        } => commands::assess::run(lat.as_deref(), lon.as_deref(), dataset, &schema, &output, trace),
        Commands::Dataset { action } => match action {
            DatasetAction::Inspect {
                file,
                schema,
                output,
            } => commands::dataset::inspect(&file, &schema, &output),
        },
        Commands::Schema { action } => match action {
            SchemaAction::List => commands::schema::list(),
            SchemaAction::Explain { preset } => commands::schema::explain(&preset),
            SchemaAction::Validate { file } => commands::schema::validate(&file),
        },
        Commands::Structure { depth, output } => commands::structure::run(depth, &output),
        Commands::Feasibility {
            roof_area,
            rainfall,
            soil,
            output,
        } => commands::feasibility::run(roof_area, rainfall, &soil, &output),
    };

    if let Err(e) = result {
        tracing::error!(status = e.status(), "{e}");
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
