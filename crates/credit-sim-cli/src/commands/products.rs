use clap::Args;
use serde_json::Value;

use credit_sim_core::catalog::CreditTypeCatalog;

use crate::input;

/// Arguments for listing credit products
#[derive(Args)]
pub struct ProductsArgs {
    /// Path to the credit type catalog (JSON or YAML)
    #[arg(long)]
    pub catalog: String,
}

pub fn run_products(args: ProductsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog: CreditTypeCatalog = input::file::read_document(&args.catalog)?;
    Ok(serde_json::to_value(catalog.credit_types())?)
}
