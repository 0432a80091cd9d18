//! Pricing module
//!
//! Provides the gold pricing calculation with:
//! - Fixed-order percentage chaining
//! - Validation of the required inputs
//! - Optional memoization of outcomes

pub mod cache;
pub mod engine;

pub use cache::{CacheStats, QuoteCache};
pub use engine::{compute_price, PricingEngine};
