//! Credit product reference data.
//!
//! Products are read-only to the engine: the catalog is loaded from a
//! reference-data document and consulted during validation. Bounds sanity
//! (`min_amount <= max_amount`, `max_months > 0`) is owned by whoever
//! maintains that document.

use serde::{Deserialize, Serialize};

use crate::error::CreditSimError;
use crate::types::{Money, Percent};
use crate::CreditSimResult;

/// A loan product with its lending bounds and default pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditType {
    pub id: String,
    pub label: String,
    /// Smallest amount this product may finance.
    pub min_amount: Money,
    /// Largest amount this product may finance.
    pub max_amount: Money,
    /// Longest permitted term, in months.
    pub max_months: u32,
    /// Nominal annual rate offered by default, in percent.
    pub default_annual_rate: Percent,
    /// Upfront fees charged by default.
    pub default_fees: Money,
    /// Annual insurance rate applied by default, in percent.
    pub default_insurance_rate: Percent,
}

/// The set of products available for simulation.
///
/// Serialises as a bare JSON array, the shape reference-data documents use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditTypeCatalog {
    credit_types: Vec<CreditType>,
}

impl CreditTypeCatalog {
    pub fn new(credit_types: Vec<CreditType>) -> Self {
        Self { credit_types }
    }

    /// Look up a product by id.
    pub fn find(&self, credit_type_id: &str) -> Option<&CreditType> {
        self.credit_types.iter().find(|ct| ct.id == credit_type_id)
    }

    /// Look up a product by id, failing with `UnknownCreditType` on a miss.
    pub fn resolve(&self, credit_type_id: &str) -> CreditSimResult<&CreditType> {
        self.find(credit_type_id)
            .ok_or_else(|| CreditSimError::UnknownCreditType {
                credit_type_id: credit_type_id.to_string(),
            })
    }

    pub fn credit_types(&self) -> &[CreditType] {
        &self.credit_types
    }

    pub fn len(&self) -> usize {
        self.credit_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credit_types.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_catalog() -> CreditTypeCatalog {
        CreditTypeCatalog::new(vec![
            CreditType {
                id: "conso".into(),
                label: "Crédit Conso".into(),
                min_amount: dec!(5_000),
                max_amount: dec!(200_000),
                max_months: 84,
                default_annual_rate: dec!(6),
                default_fees: dec!(500),
                default_insurance_rate: dec!(0.36),
            },
            CreditType {
                id: "auto".into(),
                label: "Crédit Auto".into(),
                min_amount: dec!(10_000),
                max_amount: dec!(400_000),
                max_months: 72,
                default_annual_rate: dec!(4.5),
                default_fees: dec!(750),
                default_insurance_rate: dec!(0.3),
            },
        ])
    }

    #[test]
    fn test_find_known_product() {
        let catalog = sample_catalog();
        let product = catalog.find("auto").unwrap();
        assert_eq!(product.label, "Crédit Auto");
        assert_eq!(product.max_months, 72);
    }

    #[test]
    fn test_find_unknown_product_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.find("boat").is_none());
    }

    #[test]
    fn test_resolve_unknown_product_errors() {
        let catalog = sample_catalog();
        let err = catalog.resolve("boat").unwrap_err();
        match err {
            CreditSimError::UnknownCreditType { credit_type_id } => {
                assert_eq!(credit_type_id, "boat");
            }
            other => panic!("Expected UnknownCreditType, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_deserializes_from_bare_array() {
        let json = r#"[
            {
                "id": "immo",
                "label": "Crédit Immobilier",
                "minAmount": 100000,
                "maxAmount": 2000000,
                "maxMonths": 300,
                "defaultAnnualRate": 4.2,
                "defaultFees": 2500,
                "defaultInsuranceRate": 0.45
            }
        ]"#;

        let catalog: CreditTypeCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);

        let immo = catalog.find("immo").unwrap();
        assert_eq!(immo.min_amount, dec!(100_000));
        assert_eq!(immo.max_months, 300);
        assert_eq!(immo.default_insurance_rate, dec!(0.45));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CreditTypeCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.resolve("conso").is_err());
    }
}
