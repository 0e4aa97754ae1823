mod commands;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::export::ExportArgs;
use commands::roi::RoiArgs;

/// Realised, production and contracted ROI calculator
#[derive(Parser)]
#[command(
    name = "roi",
    version,
    about = "Realised, production and contracted ROI calculator",
    long_about = "Computes return on investment against realised cash, historical production \
                  and contracted value, with net gain per day and per month since a start date. \
                  Results can be exported as a CSV row-set and a PNG report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level for diagnostics on stderr (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate ROI, net gain and per-day/per-month rates
    Calculate(RoiArgs),
    /// Show the formatted results dashboard
    Dashboard(RoiArgs),
    /// Write the CSV export and the PNG report
    Export(ExportArgs),
    /// Print the default input set (reset values)
    Defaults,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::roi::run_calculate(args),
        Commands::Dashboard(args) => commands::roi::run_dashboard(args),
        Commands::Export(args) => commands::export::run_export(args),
        Commands::Defaults => commands::roi::run_defaults(),
        Commands::Version => {
            println!("roi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
