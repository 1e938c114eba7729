//! Request validation against the product catalog.
//!
//! Checks run in a fixed order and stop at the first failure: required
//! fields first, then the amount bounds, then the duration bounds. A
//! product mismatch is caught earlier, at catalog resolution, so a request
//! naming an unknown product never reaches the numeric checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::CreditType;
use crate::error::CreditSimError;
use crate::types::{Money, Percent};
use crate::CreditSimResult;

/// Term a quote form opens with, capped by the product's maximum.
const DEFAULT_TERM_MONTHS: u32 = 60;

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// A simulation request as submitted by a caller.
///
/// `amount` and `months` are optional at this level so an incomplete
/// submission can be reported as a missing field instead of failing at the
/// parsing boundary. `fees` and `insurance_rate` default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub credit_type_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<u32>,
    pub annual_rate: Percent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_rate: Option<Percent>,
}

impl SimulationRequest {
    /// A request seeded from a product's defaults, the way a quote form
    /// opens: minimum amount, a five-year term capped by the product, and
    /// the product's default pricing.
    pub fn prefilled(credit_type: &CreditType) -> Self {
        Self {
            credit_type_id: credit_type.id.clone(),
            amount: Some(credit_type.min_amount),
            months: Some(credit_type.max_months.min(DEFAULT_TERM_MONTHS)),
            annual_rate: credit_type.default_annual_rate,
            fees: Some(credit_type.default_fees),
            insurance_rate: Some(credit_type.default_insurance_rate),
        }
    }
}

/// A validated request with defaults applied, ready for the calculator.
///
/// Constructing this by hand skips validation; the calculator trusts its
/// invariants (`amount > 0`, `months >= 1`, non-negative pricing fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub credit_type_id: String,
    pub amount: Money,
    pub months: u32,
    pub annual_rate: Percent,
    pub fees: Money,
    pub insurance_rate: Percent,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a request against its product and resolve the optional fields.
///
/// A zero amount counts as missing, like an empty form field. The range
/// messages carry the product bounds so a caller can surface them directly.
pub fn validate_request(
    request: &SimulationRequest,
    credit_type: &CreditType,
) -> CreditSimResult<LoanTerms> {
    let amount = match request.amount {
        Some(amount) if !amount.is_zero() => amount,
        _ => {
            return Err(CreditSimError::MissingRequiredField {
                field: "amount".into(),
            })
        }
    };

    let months = request
        .months
        .ok_or_else(|| CreditSimError::MissingRequiredField {
            field: "months".into(),
        })?;

    if amount < credit_type.min_amount || amount > credit_type.max_amount {
        return Err(CreditSimError::AmountOutOfRange {
            min_amount: credit_type.min_amount,
            max_amount: credit_type.max_amount,
        });
    }

    if months == 0 || months > credit_type.max_months {
        return Err(CreditSimError::DurationOutOfRange {
            max_months: credit_type.max_months,
        });
    }

    Ok(LoanTerms {
        credit_type_id: request.credit_type_id.clone(),
        amount,
        months,
        annual_rate: request.annual_rate,
        fees: request.fees.unwrap_or(Decimal::ZERO),
        insurance_rate: request.insurance_rate.unwrap_or(Decimal::ZERO),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_product() -> CreditType {
        CreditType {
            id: "conso".into(),
            label: "Crédit Conso".into(),
            min_amount: dec!(5_000),
            max_amount: dec!(200_000),
            max_months: 84,
            default_annual_rate: dec!(6),
            default_fees: dec!(500),
            default_insurance_rate: dec!(0.36),
        }
    }

    fn sample_request() -> SimulationRequest {
        SimulationRequest {
            credit_type_id: "conso".into(),
            amount: Some(dec!(50_000)),
            months: Some(24),
            annual_rate: dec!(6),
            fees: None,
            insurance_rate: None,
        }
    }

    #[test]
    fn test_valid_request_resolves_defaults() {
        let terms = validate_request(&sample_request(), &sample_product()).unwrap();
        assert_eq!(terms.amount, dec!(50_000));
        assert_eq!(terms.months, 24);
        assert_eq!(terms.annual_rate, dec!(6));
        // Optional pricing fields default to zero, not the product defaults.
        assert_eq!(terms.fees, Decimal::ZERO);
        assert_eq!(terms.insurance_rate, Decimal::ZERO);
    }

    #[test]
    fn test_missing_amount() {
        let mut request = sample_request();
        request.amount = None;

        let err = validate_request(&request, &sample_product()).unwrap_err();
        match err {
            CreditSimError::MissingRequiredField { field } => assert_eq!(field, "amount"),
            other => panic!("Expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_amount_counts_as_missing() {
        let mut request = sample_request();
        request.amount = Some(Decimal::ZERO);

        let err = validate_request(&request, &sample_product()).unwrap_err();
        match err {
            CreditSimError::MissingRequiredField { field } => assert_eq!(field, "amount"),
            other => panic!("Expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_months() {
        let mut request = sample_request();
        request.months = None;

        let err = validate_request(&request, &sample_product()).unwrap_err();
        match err {
            CreditSimError::MissingRequiredField { field } => assert_eq!(field, "months"),
            other => panic!("Expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn test_amount_bounds_are_inclusive() {
        let product = sample_product();

        let mut request = sample_request();
        request.amount = Some(product.min_amount);
        assert!(validate_request(&request, &product).is_ok());

        request.amount = Some(product.max_amount);
        assert!(validate_request(&request, &product).is_ok());
    }

    #[test]
    fn test_amount_below_minimum_carries_both_bounds() {
        let mut request = sample_request();
        request.amount = Some(dec!(1_000));

        let err = validate_request(&request, &sample_product()).unwrap_err();
        match err {
            CreditSimError::AmountOutOfRange {
                min_amount,
                max_amount,
            } => {
                assert_eq!(min_amount, dec!(5_000));
                assert_eq!(max_amount, dec!(200_000));
            }
            other => panic!("Expected AmountOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_amount_just_over_maximum_rejected() {
        let mut request = sample_request();
        request.amount = Some(dec!(200_000.01));

        let err = validate_request(&request, &sample_product()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("5000"), "message was: {message}");
        assert!(message.contains("200000"), "message was: {message}");
    }

    #[test]
    fn test_negative_amount_is_out_of_range() {
        let mut request = sample_request();
        request.amount = Some(dec!(-50_000));

        let err = validate_request(&request, &sample_product()).unwrap_err();
        match err {
            CreditSimError::AmountOutOfRange { .. } => {}
            other => panic!("Expected AmountOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_duration_bounds() {
        let product = sample_product();

        let mut request = sample_request();
        request.months = Some(1);
        assert!(validate_request(&request, &product).is_ok());

        request.months = Some(product.max_months);
        assert!(validate_request(&request, &product).is_ok());

        request.months = Some(product.max_months + 1);
        let err = validate_request(&request, &product).unwrap_err();
        match err {
            CreditSimError::DurationOutOfRange { max_months } => assert_eq!(max_months, 84),
            other => panic!("Expected DurationOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_months_is_out_of_range() {
        let mut request = sample_request();
        request.months = Some(0);

        let err = validate_request(&request, &sample_product()).unwrap_err();
        match err {
            CreditSimError::DurationOutOfRange { max_months } => assert_eq!(max_months, 84),
            other => panic!("Expected DurationOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_amount_checked_before_duration() {
        // Both fields out of range: the amount error wins.
        let mut request = sample_request();
        request.amount = Some(dec!(1));
        request.months = Some(999);

        let err = validate_request(&request, &sample_product()).unwrap_err();
        match err {
            CreditSimError::AmountOutOfRange { .. } => {}
            other => panic!("Expected AmountOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_prefilled_seeds_from_product() {
        let request = SimulationRequest::prefilled(&sample_product());
        assert_eq!(request.credit_type_id, "conso");
        assert_eq!(request.amount, Some(dec!(5_000)));
        // 84-month product: capped at the default five-year term.
        assert_eq!(request.months, Some(60));
        assert_eq!(request.annual_rate, dec!(6));
        assert_eq!(request.fees, Some(dec!(500)));
        assert_eq!(request.insurance_rate, Some(dec!(0.36)));
    }

    #[test]
    fn test_prefilled_short_product_keeps_max_months() {
        let mut product = sample_product();
        product.max_months = 36;

        let request = SimulationRequest::prefilled(&product);
        assert_eq!(request.months, Some(36));
    }

    #[test]
    fn test_request_wire_shape_is_camel_case() {
        let json = r#"{
            "creditTypeId": "conso",
            "amount": 50000,
            "months": 24,
            "annualRate": 6,
            "insuranceRate": 0.36
        }"#;

        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.credit_type_id, "conso");
        assert_eq!(request.amount, Some(dec!(50_000)));
        assert_eq!(request.insurance_rate, Some(dec!(0.36)));
        assert_eq!(request.fees, None);
    }
}
