//! Error types.
//!
//! None of these escape the cart API: parse errors are defaulted away by the
//! coercion helpers and format errors fall back to a plain price string.

use thiserror::Error;

/// Errors from parsing a raw numeric attribute.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or only whitespace.
    #[error("Empty numeric input")]
    Empty,

    /// Input did not start with an integer.
    #[error("Not a number: {0:?}")]
    NotANumber(String),
}

/// Errors from formatting a currency amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The formatter has no rules for this locale.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}
