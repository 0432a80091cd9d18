//! Price breakdown - Final = Raw + Manufacturing + Profit + VAT
//!
//! The regional convention chains percentages over running subtotals:
//! - Manufacturing: percent of raw gold value
//! - Profit: percent of raw gold value plus manufacturing
//! - VAT: percent of manufacturing plus profit only (raw metal is not taxed)
//!
//! All amounts are in Toman at full precision. Rounding belongs to display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized result of one price calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Echo of the input price per gram
    pub price_per_gram_base: Decimal,

    /// weight × price per gram
    pub raw_gold_price: Decimal,

    /// Manufacturing fee amount
    pub manufacturing_cost: Decimal,

    /// Seller profit amount
    pub seller_profit: Decimal,

    /// Raw + manufacturing + profit
    pub subtotal_before_vat: Decimal,

    /// VAT on manufacturing + profit
    pub vat_amount: Decimal,

    /// Subtotal + VAT
    pub final_price: Decimal,
}

/// Row kinds of an itemized price, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    RawGold,
    Manufacturing,
    SellerProfit,
    SubtotalBeforeVat,
    Vat,
    Final,
}

impl LineItem {
    pub const ALL: [LineItem; 6] = [
        LineItem::RawGold,
        LineItem::Manufacturing,
        LineItem::SellerProfit,
        LineItem::SubtotalBeforeVat,
        LineItem::Vat,
        LineItem::Final,
    ];
}

impl CalculationResult {
    /// Amount the seller profit percent applies to
    pub fn profit_base(&self) -> Decimal {
        self.raw_gold_price + self.manufacturing_cost
    }

    /// Amount the VAT percent applies to
    pub fn vat_base(&self) -> Decimal {
        self.manufacturing_cost + self.seller_profit
    }

    /// Amount for a single line item
    pub fn amount(&self, item: LineItem) -> Decimal {
        match item {
            LineItem::RawGold => self.raw_gold_price,
            LineItem::Manufacturing => self.manufacturing_cost,
            LineItem::SellerProfit => self.seller_profit,
            LineItem::SubtotalBeforeVat => self.subtotal_before_vat,
            LineItem::Vat => self.vat_amount,
            LineItem::Final => self.final_price,
        }
    }

    /// All line items with their amounts, in display order
    pub fn line_items(&self) -> impl Iterator<Item = (LineItem, Decimal)> + '_ {
        LineItem::ALL.into_iter().map(move |item| (item, self.amount(item)))
    }
}
