//! Form fields: input masking and numeric reading
//!
//! The gold price field only holds whole Toman and is regrouped in Persian
//! digits on every edit. The other fields keep whatever the user typed as
//! long as it looks like an unsigned decimal once digits are normalized.

use goldcalc_common::InputError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::digits::{to_ascii_digits, to_persian_digits};
use crate::format::group_thousands;

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    GoldPricePerGram,
    Weight,
    ManufFeePercent,
    SellerProfitPercent,
    VatPercent,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::GoldPricePerGram,
        Field::Weight,
        Field::ManufFeePercent,
        Field::SellerProfitPercent,
        Field::VatPercent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::GoldPricePerGram => "gold_price_per_gram",
            Field::Weight => "weight",
            Field::ManufFeePercent => "manuf_fee_percent",
            Field::SellerProfitPercent => "seller_profit_percent",
            Field::VatPercent => "vat_percent",
        }
    }

    /// Persian form label
    pub fn label(&self) -> &'static str {
        match self {
            Field::GoldPricePerGram => "قیمت هر گرم طلای ۱۸ عیار (تومان)",
            Field::Weight => "وزن طلا (گرم)",
            Field::ManufFeePercent => "اجرت ساخت (درصد)",
            Field::SellerProfitPercent => "سود فروشنده (درصد)",
            Field::VatPercent => "مالیات بر ارزش افزوده (درصد)",
        }
    }

    /// Apply the field's input mask to an edit.
    ///
    /// Returns the text to store, or an error when the edit must be ignored.
    pub fn mask(&self, text: &str) -> Result<String, InputError> {
        let normalized = to_ascii_digits(text);
        match self {
            Field::GoldPricePerGram => {
                let digits: String = normalized.chars().filter(char::is_ascii_digit).collect();
                if digits.is_empty() {
                    return Ok(String::new());
                }
                let value =
                    Decimal::from_str(&digits).map_err(|_| InputError::TooLarge(digits.clone()))?;
                Ok(to_persian_digits(&group_thousands(&value.to_string())))
            }
            _ if is_unsigned_decimal(&normalized) => Ok(text.to_string()),
            _ => Err(InputError::Rejected {
                field: self.name().to_string(),
                text: text.to_string(),
            }),
        }
    }

    /// Numeric value of stored field text; zero when nothing parses
    pub fn value(&self, text: &str) -> Decimal {
        let normalized = to_ascii_digits(text);
        match self {
            Field::GoldPricePerGram => {
                let digits: String = normalized.chars().filter(char::is_ascii_digit).collect();
                Decimal::from_str(&digits).unwrap_or(Decimal::ZERO)
            }
            _ => leading_number(&normalized).unwrap_or(Decimal::ZERO),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" | "gold" | "gold_price_per_gram" => Ok(Field::GoldPricePerGram),
            "weight" => Ok(Field::Weight),
            "fee" | "manuf" | "manuf_fee_percent" => Ok(Field::ManufFeePercent),
            "profit" | "seller_profit_percent" => Ok(Field::SellerProfitPercent),
            "vat" | "vat_percent" => Ok(Field::VatPercent),
            _ => Err(InputError::UnknownField(s.to_string())),
        }
    }
}

/// Digits with at most one decimal point, possibly empty
fn is_unsigned_decimal(text: &str) -> bool {
    let mut seen_point = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}

/// Longest numeric prefix: optional sign, digits, optional fraction.
///
/// Leading whitespace is skipped and trailing text ignored. `None` when no
/// digit is found.
fn leading_number(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, after) = rest.split_at(int_len);
    let frac_part = after
        .strip_prefix('.')
        .map(|frac| &frac[..frac.bytes().take_while(u8::is_ascii_digit).count()])
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part }
    );
    Decimal::from_str(&literal).ok().map(|value| value.normalize())
}
