use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreditSimError {
    #[error("Unknown credit type: {credit_type_id}")]
    UnknownCreditType { credit_type_id: String },

    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Amount out of range: must be between {min_amount} and {max_amount}")]
    AmountOutOfRange {
        min_amount: Decimal,
        max_amount: Decimal,
    },

    #[error("Duration out of range: must be between 1 and {max_months} months")]
    DurationOutOfRange { max_months: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CreditSimError {
    fn from(e: serde_json::Error) -> Self {
        CreditSimError::SerializationError(e.to_string())
    }
}
