//! Line commands understood by the interactive session

use goldcalc_common::InputError;
use goldcalc_form::Field;
use std::str::FromStr;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a field's text
    Edit(Field, String),
    /// Empty a field
    Clear(Field),
    /// Print the receipt
    Show,
    /// Print inputs and result as JSON
    Json,
    /// List fields with their current text
    Fields,
    /// Print quote cache statistics
    Stats,
    Quit,
}

impl FromStr for Command {
    type Err = InputError;

    /// Accepts `show`, `json`, `fields`, `stats`, `quit`/`exit`,
    /// `clear <field>`, `<field>=<value>` and `<field> <value>`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" | "show" => return Ok(Command::Show),
            "json" => return Ok(Command::Json),
            "fields" => return Ok(Command::Fields),
            "stats" => return Ok(Command::Stats),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let (head, value) = match line.split_once('=') {
            Some((head, value)) => (head, value),
            None => line.split_once(char::is_whitespace).unwrap_or((line, "")),
        };
        let (head, value) = (head.trim(), value.trim());

        if head.eq_ignore_ascii_case("clear") {
            return Ok(Command::Clear(value.parse()?));
        }
        Ok(Command::Edit(head.parse()?, value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("  ".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("JSON".parse::<Command>().unwrap(), Command::Json);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_edit_forms() {
        assert_eq!(
            "price=3350000".parse::<Command>().unwrap(),
            Command::Edit(Field::GoldPricePerGram, "3350000".to_string())
        );
        assert_eq!(
            "weight ۱۲.۳۴۵".parse::<Command>().unwrap(),
            Command::Edit(Field::Weight, "۱۲.۳۴۵".to_string())
        );
        assert_eq!(
            "vat =  9 ".parse::<Command>().unwrap(),
            Command::Edit(Field::VatPercent, "9".to_string())
        );
        assert_eq!(
            "fee".parse::<Command>().unwrap(),
            Command::Edit(Field::ManufFeePercent, String::new())
        );
    }

    #[test]
    fn test_clear() {
        assert_eq!(
            "clear profit".parse::<Command>().unwrap(),
            Command::Clear(Field::SellerProfitPercent)
        );
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            "karat 18".parse::<Command>(),
            Err(InputError::UnknownField(_))
        ));
    }
}
