//! Gold pricing engine
//!
//! Chains three percentages over running subtotals:
//! - Manufacturing fee on the raw gold value
//! - Seller profit on raw gold plus manufacturing
//! - VAT on manufacturing plus profit (raw gold is exempt)
//!
//! The order of the steps is part of the convention and must not change.

use goldcalc_common::{CalculationInputs, CalculationResult, PricingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

const HUNDRED: Decimal = dec!(100);

/// Stateless pricing engine
pub struct PricingEngine;

impl PricingEngine {
    /// Calculate the itemized price, or the reason it cannot be calculated
    pub fn evaluate(inputs: &CalculationInputs) -> Result<CalculationResult, PricingError> {
        inputs.validate()?;

        let price_per_gram_base = inputs.gold_price_per_gram;

        let raw_gold_price = inputs
            .weight
            .checked_mul(price_per_gram_base)
            .ok_or(PricingError::Overflow)?;
        let manufacturing_cost = percent_of(raw_gold_price, inputs.manuf_fee_percent)?;

        let profit_base = add(raw_gold_price, manufacturing_cost)?;
        let seller_profit = percent_of(profit_base, inputs.seller_profit_percent)?;
        let subtotal_before_vat = add(profit_base, seller_profit)?;

        let vat_base = add(manufacturing_cost, seller_profit)?;
        let vat_amount = percent_of(vat_base, inputs.vat_percent)?;

        let final_price = add(subtotal_before_vat, vat_amount)?;

        Ok(CalculationResult {
            price_per_gram_base,
            raw_gold_price,
            manufacturing_cost,
            seller_profit,
            subtotal_before_vat,
            vat_amount,
            final_price,
        })
    }
}

/// Calculate the itemized price for an input snapshot.
///
/// Returns `None` when the snapshot is not computable: gold price or weight
/// missing or non-positive, or amounts beyond decimal range.
pub fn compute_price(inputs: &CalculationInputs) -> Option<CalculationResult> {
    match PricingEngine::evaluate(inputs) {
        Ok(result) => Some(result),
        Err(reason) => {
            debug!(%reason, "No price for inputs");
            None
        }
    }
}

fn percent_of(amount: Decimal, percent: Decimal) -> Result<Decimal, PricingError> {
    amount
        .checked_mul(percent)
        .and_then(|scaled| scaled.checked_div(HUNDRED))
        .ok_or(PricingError::Overflow)
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_add(b).ok_or(PricingError::Overflow)
}
