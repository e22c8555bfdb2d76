mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::mortgage::{CalculateArgs, ProcessArgs};

/// Validate PiXELL River mortgage records and calculate periodic payments
#[derive(Parser)]
#[command(
    name = "pixell",
    version,
    about = "Validate mortgage records and calculate periodic payments",
    long_about = "A CLI for validating PiXELL River mortgage records against the \
                  published rates, payment frequencies and amortization terms, and \
                  calculating the fixed periodic payment with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and price every record in a delimited data file
    Process(ProcessArgs),
    /// Calculate the payment for a single mortgage
    Calculate(CalculateArgs),
    /// List valid rates, payment frequencies and amortization terms
    Rates,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Process(args) => commands::mortgage::run_process(args),
        Commands::Calculate(args) => commands::mortgage::run_calculate(args),
        Commands::Rates => commands::registry::run_rates(),
        Commands::Version => {
            println!("pixell {}", env!("CARGO_PKG_VERSION"));
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
