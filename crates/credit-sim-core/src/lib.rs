pub mod application;
pub mod catalog;
pub mod error;
pub mod simulation;
pub mod types;

pub use error::CreditSimError;
pub use types::*;

/// Standard result type for all simulation operations
pub type CreditSimResult<T> = Result<T, CreditSimError>;
