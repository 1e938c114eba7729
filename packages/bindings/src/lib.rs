use napi::Result as NapiResult;
use napi_derive::napi;

use credit_sim_core::application::{self, ApplicationFilter, LoanApplication};
use credit_sim_core::catalog::CreditTypeCatalog;
use credit_sim_core::simulation::{self, SimulationRequest};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate(catalog_json: String, request_json: String) -> NapiResult<String> {
    let catalog: CreditTypeCatalog = serde_json::from_str(&catalog_json).map_err(to_napi_error)?;
    let request: SimulationRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let result = simulation::simulate(&request, &catalog).map_err(to_napi_error)?;
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn validate_request(catalog_json: String, request_json: String) -> NapiResult<String> {
    let catalog: CreditTypeCatalog = serde_json::from_str(&catalog_json).map_err(to_napi_error)?;
    let request: SimulationRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let credit_type = catalog
        .resolve(&request.credit_type_id)
        .map_err(to_napi_error)?;
    let terms =
        simulation::validate_request(&request, credit_type).map_err(to_napi_error)?;
    serde_json::to_string(&terms).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[napi]
pub fn filter_applications(applications_json: String, filter_json: String) -> NapiResult<String> {
    let applications: Vec<LoanApplication> =
        serde_json::from_str(&applications_json).map_err(to_napi_error)?;
    let filter: ApplicationFilter = serde_json::from_str(&filter_json).map_err(to_napi_error)?;
    let filtered = application::filter_applications(&applications, &filter);
    serde_json::to_string(&filtered).map_err(to_napi_error)
}
