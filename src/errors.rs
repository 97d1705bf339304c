use thiserror::Error;
use uuid::Uuid;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BillingError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
    
    #[error("invalid amount for {field}: {value}")]
    InvalidAmount {
        field: String,
        value: String,
    },
    
    #[error("negative amount for {field}: {amount}")]
    NegativeAmount {
        field: String,
        amount: Money,
    },
    
    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },
    
    #[error("rental mismatch: monitor tracks {expected}, got {actual}")]
    RentalMismatch {
        expected: Uuid,
        actual: Uuid,
    },
    
    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl From<serde_json::Error> for BillingError {
    fn from(err: serde_json::Error) -> Self {
        BillingError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BillingError>;
