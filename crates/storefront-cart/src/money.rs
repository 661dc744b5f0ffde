//! Money type and price formatting.
//!
//! Amounts are integers in the smallest unit of the currency. COP has no
//! minor unit in circulation, so a COP amount is the face amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::FormatError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    COP,
    USD,
    EUR,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "COP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP => "$",
            Currency::USD => "US$",
            Currency::EUR => "\u{20ac}",
            Currency::MXN => "MX$",
        }
    }

    /// Number of minor-unit digits in an amount.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::COP => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, quantity: i64) -> Money {
        Money::new(self.amount.saturating_mul(quantity), self.currency)
    }

    /// Add another amount of the same currency, saturating on overflow.
    ///
    /// The cart only ever holds one currency, so the other amount's currency
    /// is not checked.
    pub fn plus(&self, other: &Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc.plus(m))
    }

    /// Plain price string used when a formatter fails (e.g. "COP $150000").
    pub fn fallback_display(&self) -> String {
        format!("{} ${}", self.currency.code(), self.amount)
    }
}

/// Locale-aware price formatting.
pub trait CurrencyFormatter {
    /// Format an amount for display.
    fn format(&self, money: &Money) -> Result<String, FormatError>;
}

/// Formatter with grouping rules for a small set of locales.
///
/// - `es-CO`: `$ 150.000` (dot grouping, comma decimals, symbol then space)
/// - `en-US`: `$150,000` (comma grouping, dot decimals)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleFormatter {
    locale: String,
}

impl LocaleFormatter {
    /// Create a formatter for a BCP 47 locale tag.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// The locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::new("es-CO")
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, money: &Money) -> Result<String, FormatError> {
        let (group, decimal, spaced) = match self.locale.as_str() {
            "es-CO" => ('.', ',', true),
            "en-US" => (',', '.', false),
            other => return Err(FormatError::UnsupportedLocale(other.to_string())),
        };

        let places = money.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let magnitude = money.amount.unsigned_abs();
        let whole = group_digits(magnitude / divisor, group);

        let mut number = whole;
        if places > 0 {
            number.push(decimal);
            number.push_str(&format!(
                "{:0width$}",
                magnitude % divisor,
                width = places as usize
            ));
        }

        let sign = if money.amount < 0 { "-" } else { "" };
        let symbol = money.currency.symbol();
        Ok(if spaced {
            format!("{sign}{symbol} {number}")
        } else {
            format!("{sign}{symbol}{number}")
        })
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Format a price, falling back to the plain display on formatter failure.
pub fn format_price(formatter: &dyn CurrencyFormatter, money: &Money) -> String {
    match formatter.format(money) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, amount = money.amount, "price formatting failed, using fallback");
            money.fallback_display()
        }
    }
}
