//! Listing filters and name search.
//!
//! Both are linear predicates over `ProductCard`s. Visibility is recomputed
//! for every card whenever either one changes.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductCard;
use crate::input::parse_int;

/// Constraints from the gender, family, and max-price selects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingFilter {
    pub gender: Option<String>,
    pub family: Option<String>,
    pub max_price: Option<i64>,
}

impl ListingFilter {
    /// Build a filter from raw select values.
    ///
    /// An empty select means "any". A max price of 0 or one that does not
    /// parse means no price constraint.
    pub fn from_raw(gender: &str, family: &str, max_price: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            gender: non_empty(gender),
            family: non_empty(family),
            max_price: parse_int(max_price).ok().filter(|p| *p != 0),
        }
    }

    /// Check whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.family.is_none() && self.max_price.is_none()
    }

    /// Check whether a card satisfies every active constraint.
    pub fn matches(&self, card: &ProductCard) -> bool {
        let gender_ok = self
            .gender
            .as_deref()
            .map_or(true, |g| card.gender.as_deref() == Some(g));
        let family_ok = self
            .family
            .as_deref()
            .map_or(true, |f| card.family.as_deref() == Some(f));
        let price_ok = self
            .max_price
            .map_or(true, |max| parse_int(&card.price).map_or(false, |p| p <= max));
        gender_ok && family_ok && price_ok
    }

    /// Visibility of each card, in listing order.
    pub fn visibility(&self, cards: &[ProductCard]) -> Vec<bool> {
        cards.iter().map(|c| self.matches(c)).collect()
    }
}

/// A normalized search box term.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize raw input: trimmed and lowercased.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The normalized term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a card's name contains the term. An empty term matches all.
    pub fn matches(&self, card: &ProductCard) -> bool {
        card.name.to_lowercase().contains(&self.0)
    }

    /// Visibility of each card, in listing order.
    pub fn visibility(&self, cards: &[ProductCard]) -> Vec<bool> {
        cards.iter().map(|c| self.matches(c)).collect()
    }
}
