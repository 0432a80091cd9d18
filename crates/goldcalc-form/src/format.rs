//! Toman display formatting
//!
//! Amounts are rounded to whole Toman (half up), grouped in thousands with
//! the Arabic thousands separator and rendered in Persian digits.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::digits::to_persian_digits;

/// Arabic thousands separator, U+066C
pub const GROUP_SEPARATOR: char = '\u{066C}';

/// Suffix appended to every formatted amount
pub const TOMAN_SUFFIX: &str = " تومان";

/// Left-to-right mark followed by U+2212 MINUS SIGN
const NEGATIVE_PREFIX: &str = "\u{200E}\u{2212}";

/// Insert a separator every three digits from the right.
///
/// Expects an unsigned run of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + len / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Grouped Persian rendering of a whole number, without suffix
pub fn format_integer(value: Decimal) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let digits = value.abs().trunc().normalize().to_string();
    let body = to_persian_digits(&group_thousands(&digits));
    if negative {
        format!("{}{}", NEGATIVE_PREFIX, body)
    } else {
        body
    }
}

/// Round half up to a whole amount
pub fn round_half_up(value: Decimal) -> Decimal {
    value
        .checked_add(dec!(0.5))
        .map(|shifted| shifted.floor())
        .unwrap_or_else(|| value.round())
}

/// Format an amount as Toman for display
pub fn format_toman(value: Decimal) -> String {
    format!("{}{}", format_integer(round_half_up(value)), TOMAN_SUFFIX)
}

/// Format a floating point amount as Toman.
///
/// Non-finite or unrepresentable values render as zero.
pub fn format_toman_f64(value: f64) -> String {
    let amount = if value.is_finite() {
        Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    format_toman(amount)
}
