//! # Goldcalc Form
//!
//! Presentation layer around the pricing engine:
//!
//! - [`digits`]: Persian / Arabic-Indic digit normalization
//! - [`field`]: per-field input masks and lenient numeric reading
//! - [`format`]: Toman rendering with Persian digits
//! - [`form`]: form state that re-prices on every read
//! - [`receipt`]: itemized rows with Persian labels

pub mod digits;
pub mod field;
pub mod form;
pub mod format;
pub mod receipt;

pub use digits::{to_ascii_digits, to_persian_digits};
pub use field::Field;
pub use form::{FormText, GoldForm};
pub use format::{format_toman, format_toman_f64};
pub use receipt::{Receipt, ReceiptRow, OUT_OF_RANGE, PROMPT};
