//! The loan simulation engine.
//!
//! One entry point, [`simulate`], running the three stages in order:
//! resolve the product, validate the request against it, compute the
//! schedule. The stages are also exposed individually for callers that
//! already hold a resolved product or validated terms.

pub mod apr;
pub mod schedule;
pub mod validate;

pub use apr::estimate_apr;
pub use schedule::{compute_schedule, AmortizationRow, SimulationResult, PREVIEW_MONTHS};
pub use validate::{validate_request, LoanTerms, SimulationRequest};

use crate::catalog::CreditTypeCatalog;
use crate::CreditSimResult;

/// Run a full simulation: resolve the product, validate, compute.
///
/// Pure and stateless; the catalog is only read. Any failure is a typed
/// validation outcome, never a panic.
pub fn simulate(
    request: &SimulationRequest,
    catalog: &CreditTypeCatalog,
) -> CreditSimResult<SimulationResult> {
    let credit_type = catalog.resolve(&request.credit_type_id)?;
    let terms = validate_request(request, credit_type)?;
    Ok(compute_schedule(&terms))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
