//! Itemized receipt for display

use goldcalc_common::{CalculationResult, LineItem};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::form::FormText;
use crate::format::format_toman;

/// Shown while gold price or weight is still missing
pub const PROMPT: &str = "لطفاً قیمت هر گرم طلای ۱۸ عیار و وزن طلا و اجرت ساخت را وارد کنید.";

/// Shown when both are filled in but the amounts do not fit a decimal
pub const OUT_OF_RANGE: &str = "مقادیر وارد شده بیش از حد بزرگ است و قیمت قابل محاسبه نیست.";

/// One displayed line of the receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptRow {
    pub item: LineItem,
    pub label: String,
    pub amount: Decimal,
    pub formatted: String,
    /// Final price row, rendered with emphasis
    pub total: bool,
}

/// What the result area shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Receipt {
    Prompt,
    OutOfRange,
    Itemized(Vec<ReceiptRow>),
}

impl Receipt {
    pub fn build(result: Option<&CalculationResult>, text: &FormText) -> Self {
        let Some(result) = result else {
            return if text.snapshot().is_ready() {
                Receipt::OutOfRange
            } else {
                Receipt::Prompt
            };
        };

        let rows = result
            .line_items()
            .map(|(item, amount)| ReceiptRow {
                item,
                label: label(item, text),
                amount,
                formatted: format_toman(amount),
                total: item == LineItem::Final,
            })
            .collect();
        Receipt::Itemized(rows)
    }

    pub fn rows(&self) -> &[ReceiptRow] {
        match self {
            Receipt::Prompt | Receipt::OutOfRange => &[],
            Receipt::Itemized(rows) => rows,
        }
    }

    /// The final price row
    pub fn total(&self) -> Option<&ReceiptRow> {
        self.rows().iter().find(|row| row.total)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::Prompt => writeln!(f, "{}", PROMPT),
            Receipt::OutOfRange => writeln!(f, "{}", OUT_OF_RANGE),
            Receipt::Itemized(rows) => {
                for row in rows {
                    if row.total {
                        writeln!(f, "{}", "-".repeat(32))?;
                    }
                    writeln!(f, "{}: {}", row.label, row.formatted)?;
                }
                Ok(())
            }
        }
    }
}

fn label(item: LineItem, text: &FormText) -> String {
    match item {
        LineItem::RawGold => "قیمت خام طلا".to_string(),
        LineItem::Manufacturing => format!("اجرت ساخت ({}%)", percent(&text.manuf_fee_percent)),
        LineItem::SellerProfit => {
            format!("سود فروشنده ({}%)", percent(&text.seller_profit_percent))
        }
        LineItem::SubtotalBeforeVat => "جمع کل قبل از مالیات".to_string(),
        LineItem::Vat => format!("مالیات بر ارزش افزوده ({}%)", percent(&text.vat_percent)),
        LineItem::Final => "قیمت نهایی".to_string(),
    }
}

/// Percent text as typed, or 0 when empty
fn percent(text: &str) -> &str {
    if text.is_empty() {
        "0"
    } else {
        text
    }
}
