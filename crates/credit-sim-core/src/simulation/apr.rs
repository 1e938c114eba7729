//! Effective annual rate estimation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

/// Estimate the annual percentage rate from the all-in cost of the loan.
///
/// Annualizes the cost premium over principal: `((total_cost - amount) /
/// amount) / (months / 12) * 100`. This is an approximation, not an
/// internal-rate-of-return solve.
///
/// Preconditions: `amount > 0` and `months >= 1`, both guaranteed by
/// validation upstream.
pub fn estimate_apr(total_cost: Money, amount: Money, months: u32) -> Percent {
    let years = Decimal::from(months) / dec!(12);
    ((total_cost - amount) / amount) / years * dec!(100)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
