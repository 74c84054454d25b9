use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::errors::{InvalidIsoCurrencyCode, InvalidNumberLocale};

/// Separators and currency used to read and write amounts as text.
///
/// In RON:
/// `(decimal_separator: ',', thousands_separator: '.', currency_code: Some("BRL"))`
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize, serde_derive::Serialize)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl Default for NumberLocale {
    /// Comma decimal mark, dot thousands separator (1.234,56), no currency.
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            thousands_separator: '.',
            currency_code: None,
        }
    }
}

impl NumberLocale {
    pub fn new(decimal_separator: char, thousands_separator: char) -> Self {
        Self {
            decimal_separator,
            thousands_separator,
            currency_code: None,
        }
    }

    pub fn with_currency(mut self, code: &str) -> Self {
        self.currency_code = Some(code.to_string());
        self
    }

    /// Checks the separators and resolves the configured currency.
    pub(crate) fn validate(&self) -> Result<Option<Currency>, ServerError> {
        if self.decimal_separator == self.thousands_separator {
            return Err(InvalidNumberLocale::new(
                "decimal and thousands separators must differ",
            ));
        }
        for separator in [self.decimal_separator, self.thousands_separator] {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(InvalidNumberLocale::new(&format!(
                    "'{}' cannot be used as a separator",
                    separator
                )));
            }
        }
        self.currency_code
            .as_deref()
            .map(|code| Currency::from_code(code).ok_or_else(|| InvalidIsoCurrencyCode::new(code)))
            .transpose()
    }
}
