//! Product identity.
//!
//! Listing cards identify a product through whichever of these is available
//! first: the card's element id, its `data-id` attribute, or a slug of its
//! display name. `derive_product_id` takes the already-extracted raw fields so
//! it can be exercised without any UI surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&ProductId> for ProductId {
    fn from(id: &ProductId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Turn a display name into an identifier.
///
/// Each run of whitespace collapses to a single `-` and the result is
/// lowercased. The name is not trimmed, so surrounding whitespace becomes a
/// leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// Derive a product's identity from the raw card fields.
///
/// Empty strings count as absent.
pub fn derive_product_id(element_id: Option<&str>, data_id: Option<&str>, name: &str) -> ProductId {
    element_id
        .filter(|s| !s.is_empty())
        .or_else(|| data_id.filter(|s| !s.is_empty()))
        .map(ProductId::from)
        .unwrap_or_else(|| ProductId::new(slugify(name)))
}
