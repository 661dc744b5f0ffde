//! Coercion of raw numeric attributes.
//!
//! Prices and quantities arrive as attribute or form-field text. Malformed
//! input never fails an operation: prices default to 0 and quantities to 1.

use tracing::debug;

use crate::error::ParseError;

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Values beyond `i64` saturate.
pub fn parse_int(raw: &str) -> Result<i64, ParseError> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return Err(ParseError::NotANumber(raw.to_string()));
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse a unit price, defaulting to 0.
///
/// Negative prices also become 0.
pub fn parse_price(raw: &str) -> i64 {
    match parse_int(raw) {
        Ok(price) if price >= 0 => price,
        Ok(price) => {
            debug!(price, "negative price coerced to 0");
            0
        }
        Err(e) => {
            debug!(error = %e, "unparseable price coerced to 0");
            0
        }
    }
}

/// Parse a requested quantity, defaulting to 1.
pub fn parse_quantity(raw: &str) -> i64 {
    match parse_int(raw) {
        Ok(quantity) => clamp_quantity(quantity),
        Err(e) => {
            debug!(error = %e, "unparseable quantity coerced to 1");
            1
        }
    }
}

/// Clamp a quantity to the minimum of 1.
pub fn clamp_quantity(quantity: i64) -> i64 {
    quantity.max(1)
}
