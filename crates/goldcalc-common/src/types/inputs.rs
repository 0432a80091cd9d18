//! Calculation inputs - one immutable snapshot of the form
//!
//! The two required quantities (gold price, weight) must be positive before a
//! price can be computed. The three percentage rates have no floor and
//! default to zero when absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Inputs to the gold pricing calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Price of one gram of 18-karat reference gold (Toman)
    pub gold_price_per_gram: Decimal,

    /// Item mass in grams
    pub weight: Decimal,

    /// Manufacturing fee, percent of raw gold value
    #[serde(default)]
    pub manuf_fee_percent: Decimal,

    /// Seller margin, percent of raw gold value plus fee
    #[serde(default)]
    pub seller_profit_percent: Decimal,

    /// Value-added tax, percent of fee plus profit
    #[serde(default)]
    pub vat_percent: Decimal,
}

impl CalculationInputs {
    /// Create inputs with all percentage rates at zero
    pub fn new(gold_price_per_gram: Decimal, weight: Decimal) -> Self {
        Self {
            gold_price_per_gram,
            weight,
            ..Self::default()
        }
    }

    /// Set manufacturing fee percent
    pub fn with_manuf_fee(mut self, percent: Decimal) -> Self {
        self.manuf_fee_percent = percent;
        self
    }

    /// Set seller profit percent
    pub fn with_seller_profit(mut self, percent: Decimal) -> Self {
        self.seller_profit_percent = percent;
        self
    }

    /// Set VAT percent
    pub fn with_vat(mut self, percent: Decimal) -> Self {
        self.vat_percent = percent;
        self
    }

    /// Check the required fields.
    ///
    /// The gold price is checked first, so a snapshot missing both reports
    /// `MissingGoldPrice`.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.gold_price_per_gram <= Decimal::ZERO {
            return Err(PricingError::MissingGoldPrice);
        }
        if self.weight <= Decimal::ZERO {
            return Err(PricingError::MissingWeight);
        }
        Ok(())
    }

    /// Whether a price can be computed from this snapshot
    pub fn is_ready(&self) -> bool {
        self.validate().is_ok()
    }
}
