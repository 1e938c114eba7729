//! Payment and amortization arithmetic for validated requests.
//!
//! All math uses `rust_decimal::Decimal` at full precision; the two-decimal
//! rounding of a result happens once, when the output struct is assembled.
//! The calculator is total over validated terms: it returns a result, never
//! an error.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::simulation::apr::estimate_apr;
use crate::simulation::validate::LoanTerms;
use crate::types::{round2, Money, Percent};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of leading schedule rows included in a result.
pub const PREVIEW_MONTHS: u32 = 6;

// ---------------------------------------------------------------------------
// Output Types
// ---------------------------------------------------------------------------

/// One month of the repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// 1-based month index.
    pub month: u32,
    pub interest: Money,
    pub principal: Money,
    pub remaining_balance: Money,
}

/// The complete outcome of one simulation.
///
/// Echoes the validated request fields alongside the computed figures, so
/// the document is self-describing. Created solely by the calculator and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub credit_type_id: String,
    pub amount: Money,
    pub months: u32,
    pub annual_rate: Percent,
    pub fees: Money,
    pub insurance_rate: Percent,
    /// Base annuity payment, excluding insurance.
    pub monthly_payment: Money,
    pub monthly_payment_with_insurance: Money,
    pub total_interest: Money,
    pub total_insurance: Money,
    /// Everything repaid over the term: principal, interest, insurance, fees.
    pub total_cost: Money,
    /// Estimated annual percentage rate, in percent.
    pub apr: Percent,
    /// First months of the schedule, at most [`PREVIEW_MONTHS`] rows.
    pub amortization: Vec<AmortizationRow>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the full simulation outcome for validated terms.
///
/// The payment is the standard annuity formula; a zero rate degrades to
/// straight-line principal. The amortization preview walks the first
/// `min(months, 6)` rows carrying an unrounded balance, stopping early if
/// the balance reaches zero.
pub fn compute_schedule(terms: &LoanTerms) -> SimulationResult {
    let monthly_rate = if terms.annual_rate > Decimal::ZERO {
        terms.annual_rate / dec!(100) / dec!(12)
    } else {
        Decimal::ZERO
    };

    let months = Decimal::from(terms.months);

    // months >= 1 is guaranteed by validation, so both branches are total.
    let monthly_payment = if monthly_rate > Decimal::ZERO {
        let factor = (Decimal::ONE + monthly_rate).powd(months);
        terms.amount * monthly_rate / (Decimal::ONE - Decimal::ONE / factor)
    } else {
        terms.amount / months
    };

    let insurance_monthly = if terms.insurance_rate > Decimal::ZERO {
        terms.amount * terms.insurance_rate / dec!(100) / dec!(12)
    } else {
        Decimal::ZERO
    };

    let total_repaid = monthly_payment * months;
    let total_interest = total_repaid - terms.amount;
    let total_insurance = insurance_monthly * months;
    let total_cost = total_repaid + total_insurance + terms.fees;

    let apr = estimate_apr(total_cost, terms.amount, terms.months);

    let preview_len = terms.months.min(PREVIEW_MONTHS);
    let mut amortization = Vec::with_capacity(preview_len as usize);
    let mut remaining = terms.amount;

    for month in 1..=preview_len {
        let interest = remaining * monthly_rate;
        let principal = monthly_payment - interest;
        remaining = (remaining - principal).max(Decimal::ZERO);

        amortization.push(AmortizationRow {
            month,
            interest: round2(interest),
            principal: round2(principal),
            remaining_balance: round2(remaining),
        });

        if remaining.is_zero() {
            break;
        }
    }

    SimulationResult {
        credit_type_id: terms.credit_type_id.clone(),
        amount: terms.amount,
        months: terms.months,
        annual_rate: terms.annual_rate,
        fees: terms.fees,
        insurance_rate: terms.insurance_rate,
        monthly_payment: round2(monthly_payment),
        monthly_payment_with_insurance: round2(monthly_payment + insurance_monthly),
        total_interest: round2(total_interest),
        total_insurance: round2(total_insurance),
        total_cost: round2(total_cost),
        apr: round2(apr),
        amortization,
        created_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
