use clap::Args;
use serde_json::Value;

use credit_sim_core::application::{
    filter_applications, ApplicationFilter, ApplicationStatus, LoanApplication,
};

use crate::input;

/// Arguments for the application listing
#[derive(Args)]
pub struct ApplicationsArgs {
    /// Path to the applications file (JSON or YAML)
    #[arg(long)]
    pub input: String,

    /// Case-insensitive search on full name or email
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (pending, in-progress, accepted, refused)
    #[arg(long)]
    pub status: Option<ApplicationStatus>,
}

pub fn run_applications(args: ApplicationsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let applications: Vec<LoanApplication> = input::file::read_document(&args.input)?;

    let filter = ApplicationFilter {
        search: args.search,
        status: args.status,
    };
    let filtered = filter_applications(&applications, &filter);

    Ok(serde_json::to_value(filtered)?)
}
