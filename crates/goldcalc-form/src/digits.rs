//! Persian and Arabic-Indic digit conversion

/// Extended Arabic-Indic (Persian) zero, U+06F0
const PERSIAN_ZERO: u32 = 0x06F0;

/// Arabic-Indic zero, U+0660
const ARABIC_ZERO: u32 = 0x0660;

/// Replace Persian and Arabic-Indic digits with ASCII digits.
///
/// Every other character passes through unchanged.
pub fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            let offset = match c {
                '\u{06F0}'..='\u{06F9}' => code - PERSIAN_ZERO,
                '\u{0660}'..='\u{0669}' => code - ARABIC_ZERO,
                _ => return c,
            };
            char::from_digit(offset, 10).unwrap_or(c)
        })
        .collect()
}

/// Replace ASCII digits with Persian digits
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(PERSIAN_ZERO + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}
