mod budget_file;
mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::summary::{DailyLimitArgs, SummaryArgs};

/// Monthly budget summaries and daily spending limits
#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly budget summaries and daily spending limits",
    long_about = "Computes a monthly budget summary from a JSON budget file: \
                  funds minus savings, recurring (cyclic) costs, and ad-hoc \
                  spending, plus a safe daily spending limit for the days \
                  remaining in the month."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the monthly summary for a date (defaults to today)
    Summary(SummaryArgs),
    /// Compute the daily spending limit for the rest of a month
    DailyLimit(DailyLimitArgs),
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

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Summary(args) => commands::summary::run_summary(args),
        Commands::DailyLimit(args) => commands::summary::run_daily_limit(args),
        Commands::Version => {
            println!("budget {}", env!("CARGO_PKG_VERSION"));
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
