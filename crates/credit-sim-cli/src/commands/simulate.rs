use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use credit_sim_core::catalog::CreditTypeCatalog;
use credit_sim_core::simulation::{self, SimulationRequest};

use crate::input;

/// Arguments for loan simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to the credit type catalog (JSON or YAML)
    #[arg(long)]
    pub catalog: String,

    /// Path to a simulation request file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Credit product id
    #[arg(long)]
    pub credit_type: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub months: Option<u32>,

    /// Annual rate in percent (defaults to the product's rate)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Upfront fees (defaults to the product's fees)
    #[arg(long)]
    pub fees: Option<Decimal>,

    /// Annual insurance rate in percent (defaults to the product's rate)
    #[arg(long)]
    pub insurance_rate: Option<Decimal>,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog: CreditTypeCatalog = input::file::read_document(&args.catalog)?;

    let request: SimulationRequest = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        request_from_flags(&args, &catalog)?
    };

    let result = simulation::simulate(&request, &catalog)?;
    Ok(serde_json::to_value(result)?)
}

/// Build a request from individual flags, back-filling pricing fields from
/// the product defaults the way the quote form does.
fn request_from_flags(
    args: &SimulateArgs,
    catalog: &CreditTypeCatalog,
) -> Result<SimulationRequest, Box<dyn std::error::Error>> {
    let credit_type_id = args
        .credit_type
        .clone()
        .ok_or("--credit-type is required (or provide --input)")?;

    let credit_type = catalog.resolve(&credit_type_id)?;

    Ok(SimulationRequest {
        credit_type_id,
        amount: args.amount,
        months: args.months,
        annual_rate: args.annual_rate.unwrap_or(credit_type.default_annual_rate),
        fees: Some(args.fees.unwrap_or(credit_type.default_fees)),
        insurance_rate: Some(
            args.insurance_rate
                .unwrap_or(credit_type.default_insurance_rate),
        ),
    })
}
