mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::applications::ApplicationsArgs;
use commands::products::ProductsArgs;
use commands::simulate::SimulateArgs;

/// Loan repayment simulation from the command line
#[derive(Parser)]
#[command(
    name = "credsim",
    version,
    about = "Loan repayment simulation from the command line",
    long_about = "Simulate loan repayment terms with decimal precision: monthly \
                  payment, insurance, total cost, estimated APR, and an \
                  amortization preview, validated against a product catalog."
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
    /// Simulate repayment terms for a loan request
    Simulate(SimulateArgs),
    /// List the credit products in a catalog
    Products(ProductsArgs),
    /// List and filter loan applications
    Applications(ApplicationsArgs),
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
        Commands::Simulate(args) => commands::simulate::run_simulate(args),
        Commands::Products(args) => commands::products::run_products(args),
        Commands::Applications(args) => commands::applications::run_applications(args),
        Commands::Version => {
            println!("credsim {}", env!("CARGO_PKG_VERSION"));
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
