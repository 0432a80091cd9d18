//! # Goldcalc Common
//!
//! Shared types and errors for the goldcalc gold price calculator.
//!
//! ## Core Types
//!
//! - [`CalculationInputs`]: gold price, weight, and the three percentage rates
//! - [`CalculationResult`]: itemized price derived from one input snapshot
//! - [`LineItem`]: row kinds of the itemized price

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{GoldcalcError, InputError, PricingError, Result};
pub use types::{
    breakdown::{CalculationResult, LineItem},
    inputs::CalculationInputs,
};

/// Goldcalc version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Currency all amounts are expressed in
pub const CURRENCY: &str = "Toman";

/// Default seller profit percent shown in a fresh form
pub const DEFAULT_SELLER_PROFIT_PERCENT: &str = "7";

/// Default VAT percent shown in a fresh form
pub const DEFAULT_VAT_PERCENT: &str = "10";
