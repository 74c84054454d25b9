use fractic_server_error::ServerError;
use iso_currency::Currency;
use num_format::{CustomFormat, Grouping, ToFormattedString as _};
use tracing::warn;

use crate::{
    entities::{CanonicalAmount, NumberLocale, MAX_CANONICAL_MAGNITUDE},
    errors::{AmountEmpty, AmountNotANumber, AmountOutOfRange, InvalidNumberLocale},
};

use super::utils::{round2, to_cents};

/// Reads locale-formatted amount text into canonical amounts, and writes
/// canonical amounts back as locale text.
#[derive(Debug, Clone)]
pub struct NumberCodec {
    locale: NumberLocale,
    currency: Option<Currency>,
    grouping: CustomFormat,
}

impl Default for NumberCodec {
    fn default() -> Self {
        Self::new(NumberLocale::default()).expect("built-in number locale should be valid")
    }
}

impl NumberCodec {
    pub fn new(locale: NumberLocale) -> Result<Self, ServerError> {
        let currency = locale.validate()?;
        let grouping = CustomFormat::builder()
            .grouping(Grouping::Standard)
            .separator(locale.thousands_separator.to_string())
            .build()
            .map_err(|e| InvalidNumberLocale::with_debug("unsupported thousands separator", &e))?;
        Ok(Self {
            locale,
            currency,
            grouping,
        })
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Tolerant parse: anything that does not read as an amount becomes zero.
    pub fn parse_localized(&self, text: &str) -> CanonicalAmount {
        match self.try_parse_localized(text) {
            Ok(amount) => amount,
            Err(_) if text.trim().is_empty() => 0.0,
            Err(_) => {
                warn!("unparseable amount {:?} read as zero", text);
                0.0
            }
        }
    }

    /// Strict parse, reporting empty, non-numeric and out-of-range text.
    pub fn try_parse_localized(&self, text: &str) -> Result<CanonicalAmount, ServerError> {
        if text.trim().is_empty() {
            return Err(AmountEmpty::new());
        }
        let text_without_symbol = match self.currency {
            Some(currency) => text.replace(&currency.symbol().to_string(), ""),
            None => text.to_string(),
        };

        let decimal = self.locale.decimal_separator;
        let thousands = self.locale.thousands_separator;

        // Keep digits and separators; a minus only counts before the first digit.
        let mut negative = false;
        let mut seen_digit = false;
        let mut cleaned = String::with_capacity(text_without_symbol.len());
        for c in text_without_symbol.chars() {
            if c.is_ascii_digit() {
                seen_digit = true;
                cleaned.push(c);
            } else if c == decimal || c == thousands {
                cleaned.push(c);
            } else if c == '-' && !seen_digit {
                negative = true;
            }
        }
        if !seen_digit {
            return Err(AmountNotANumber::new(text));
        }

        let normalized = if cleaned.contains(decimal) {
            cleaned.replace(thousands, "").replace(decimal, ".")
        } else if cleaned.contains(thousands) {
            let groups: Vec<&str> = cleaned.split(thousands).collect();
            let is_grouping =
                groups.len() > 2 || groups.last().map_or(false, |group| group.len() > 2);
            if is_grouping {
                cleaned.replace(thousands, "")
            } else {
                cleaned.replace(thousands, ".")
            }
        } else {
            cleaned
        };

        let magnitude = normalized
            .parse::<f64>()
            .map_err(|e| AmountNotANumber::with_debug(text, &e))?;
        if !magnitude.is_finite() || magnitude > MAX_CANONICAL_MAGNITUDE {
            return Err(AmountOutOfRange::new(text));
        }
        Ok(round2(if negative { -magnitude } else { magnitude }))
    }

    /// Always exactly two decimals, thousands grouped, leading minus.
    /// Magnitudes beyond `MAX_CANONICAL_MAGNITUDE` are clamped to it.
    pub fn format_localized(&self, amount: CanonicalAmount) -> String {
        let amount = if amount.is_finite() && amount.abs() > MAX_CANONICAL_MAGNITUDE {
            warn!(
                "amount {:e} is outside the supported range, formatted as {:e}",
                amount, MAX_CANONICAL_MAGNITUDE
            );
            MAX_CANONICAL_MAGNITUDE.copysign(amount)
        } else {
            amount
        };
        let cents = to_cents(amount);
        let integer_part = (cents.unsigned_abs() / 100).to_formatted_string(&self.grouping);
        format!(
            "{}{}{}{:02}",
            if cents < 0 { "-" } else { "" },
            integer_part,
            self.locale.decimal_separator,
            cents.unsigned_abs() % 100,
        )
    }

    /// Like `format_localized`, prefixed with the currency symbol if one is
    /// configured.
    pub fn format_currency(&self, amount: CanonicalAmount) -> String {
        match self.currency {
            Some(currency) => format!("{} {}", currency.symbol(), self.format_localized(amount)),
            None => self.format_localized(amount),
        }
    }
}
