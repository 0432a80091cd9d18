//! Error types for goldcalc
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using GoldcalcError
pub type Result<T> = std::result::Result<T, GoldcalcError>;

/// Unified error type for goldcalc operations
#[derive(Debug, Error)]
pub enum GoldcalcError {
    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Form input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // Terminal / stream errors
    #[error("I/O error: {0}")]
    Io(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Reasons a price cannot be computed.
///
/// None of these is a fault: they describe an input snapshot that is not
/// ready yet, and callers render them as "nothing to show".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Gold price per gram must be positive")]
    MissingGoldPrice,

    #[error("Weight must be positive")]
    MissingWeight,

    #[error("Pricing calculation overflow")]
    Overflow,
}

/// Form field edit errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Rejected input for {field}: {text:?}")]
    Rejected { field: String, text: String },

    #[error("Number too large: {0}")]
    TooLarge(String),
}

impl From<serde_json::Error> for GoldcalcError {
    fn from(err: serde_json::Error) -> Self {
        GoldcalcError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for GoldcalcError {
    fn from(err: std::io::Error) -> Self {
        GoldcalcError::Io(err.to_string())
    }
}
