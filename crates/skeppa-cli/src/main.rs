mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skeppa",
    version,
    about = "Extract per-part forecasts from EDI shipment-forecast PDFs and back-calculate shipping dates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract per-part forecast records from a forecast PDF
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Week label that starts a trailing section to drop
        #[arg(long = "skip-after", value_name = "LABEL")]
        skip_after: Option<String>,

        /// Sort records by their earliest delivery date
        #[arg(long)]
        sort_by_earliest: bool,
    },
    /// Apply transit times and re-key forecasts by shipping date
    Ship {
        /// Path to a PDF or pre-extracted JSON file
        input_file: PathBuf,

        /// Transit time in business days, applied to every part
        #[arg(short, long, value_name = "DAYS")]
        transit_time: Option<String>,

        /// Per-record transit time, e.g. --set item_2=5 (repeatable)
        #[arg(long = "set", value_name = "ID=DAYS")]
        set: Vec<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Week label that starts a trailing section to drop
        #[arg(long = "skip-after", value_name = "LABEL")]
        skip_after: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            skip_after,
            sort_by_earliest,
        } => commands::extract::run(input_file, &output, out, skip_after, sort_by_earliest),
        Commands::Ship {
            input_file,
            transit_time,
            set,
            output,
            skip_after,
        } => commands::ship::run(input_file, transit_time, set, &output, skip_after),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
