//! UI state owned by the storefront.

use serde::{Deserialize, Serialize};
use storefront_cart::ProductCard;

/// A product shown in the quick-view modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickView {
    /// Index of the card in the listing.
    pub card_index: usize,
    /// Heading text of the card.
    pub name: String,
    /// Brand line, empty when the card has none.
    pub brand: String,
    /// Displayed price text, empty when the card has none.
    pub price_text: String,
    /// Image source, empty when the card has none.
    pub image_url: String,
}

impl QuickView {
    /// Populate a quick view from a listing card.
    pub fn from_card(card_index: usize, card: &ProductCard) -> Self {
        Self {
            card_index,
            name: card.name.clone(),
            brand: card.brand.clone().unwrap_or_default(),
            price_text: card.price_text.clone().unwrap_or_default(),
            image_url: card.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Visible state of the page chrome around the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Whether the cart panel is open.
    pub cart_open: bool,
    /// The open quick view, if any.
    pub modal: Option<QuickView>,
    /// Whether the search bar is shown.
    pub search_visible: bool,
    /// Per-card visibility in listing order.
    pub visible: Vec<bool>,
}

impl UiState {
    /// Initial state for a listing of `cards` products, all visible.
    pub fn new(cards: usize) -> Self {
        Self {
            visible: vec![true; cards],
            ..Default::default()
        }
    }

    /// Whether the quick-view modal is open.
    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }
}
