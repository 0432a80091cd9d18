//! Gold price form
//!
//! Holds the raw text of each field. Every read takes an immutable
//! [`CalculationInputs`] snapshot and asks the pricing service again, so the
//! displayed price always follows the latest edit.

use goldcalc_common::{
    CalculationInputs, CalculationResult, InputError, DEFAULT_SELLER_PROFIT_PERCENT,
    DEFAULT_VAT_PERCENT,
};
use goldcalc_pricing::PricingService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::field::Field;
use crate::receipt::Receipt;

/// Raw text of every form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormText {
    pub gold_price_per_gram: String,
    pub weight: String,
    pub manuf_fee_percent: String,
    pub seller_profit_percent: String,
    pub vat_percent: String,
}

impl Default for FormText {
    fn default() -> Self {
        Self {
            gold_price_per_gram: String::new(),
            weight: String::new(),
            manuf_fee_percent: String::new(),
            seller_profit_percent: DEFAULT_SELLER_PROFIT_PERCENT.to_string(),
            vat_percent: DEFAULT_VAT_PERCENT.to_string(),
        }
    }
}

impl FormText {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::GoldPricePerGram => &self.gold_price_per_gram,
            Field::Weight => &self.weight,
            Field::ManufFeePercent => &self.manuf_fee_percent,
            Field::SellerProfitPercent => &self.seller_profit_percent,
            Field::VatPercent => &self.vat_percent,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::GoldPricePerGram => &mut self.gold_price_per_gram,
            Field::Weight => &mut self.weight,
            Field::ManufFeePercent => &mut self.manuf_fee_percent,
            Field::SellerProfitPercent => &mut self.seller_profit_percent,
            Field::VatPercent => &mut self.vat_percent,
        }
    }

    /// Parse every field into an input snapshot
    pub fn snapshot(&self) -> CalculationInputs {
        CalculationInputs {
            gold_price_per_gram: Field::GoldPricePerGram.value(&self.gold_price_per_gram),
            weight: Field::Weight.value(&self.weight),
            manuf_fee_percent: Field::ManufFeePercent.value(&self.manuf_fee_percent),
            seller_profit_percent: Field::SellerProfitPercent.value(&self.seller_profit_percent),
            vat_percent: Field::VatPercent.value(&self.vat_percent),
        }
    }
}

/// Interactive gold price form
pub struct GoldForm {
    text: FormText,
    service: Arc<PricingService>,
}

impl GoldForm {
    /// Create a form with the default field text
    pub fn new(service: Arc<PricingService>) -> Self {
        Self {
            text: FormText::default(),
            service,
        }
    }

    pub fn text(&self) -> &FormText {
        &self.text
    }

    /// Apply an edit to a field.
    ///
    /// A rejected edit leaves the field unchanged.
    pub fn edit(&mut self, field: Field, input: &str) -> Result<(), InputError> {
        let masked = field.mask(input)?;
        debug!(%field, text = %masked, "Field updated");
        *self.text.slot_mut(field) = masked;
        Ok(())
    }

    /// Empty a field
    pub fn clear(&mut self, field: Field) {
        self.text.slot_mut(field).clear();
    }

    /// Current input snapshot
    pub fn snapshot(&self) -> CalculationInputs {
        self.text.snapshot()
    }

    /// Whether gold price and weight are both filled in.
    ///
    /// A ready form can still have no result when the amounts overflow.
    pub fn is_ready(&self) -> bool {
        self.snapshot().is_ready()
    }

    /// Price for the current field values
    pub fn result(&self) -> Option<CalculationResult> {
        self.service.quote(&self.snapshot())
    }

    /// Itemized view for the current field values
    pub fn receipt(&self) -> Receipt {
        Receipt::build(self.result().as_ref(), &self.text)
    }
}
