//! Product listing cards.

use serde::{Deserialize, Serialize};

use crate::cart::ProductInput;
use crate::ids::{derive_product_id, ProductId};
use crate::input::parse_price;

/// A product card from the listing, with its raw attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductCard {
    /// Element id of the card, if any.
    pub element_id: Option<String>,
    /// `data-id` attribute, if any.
    pub data_id: Option<String>,
    /// Heading text as it appears in the card.
    pub name: String,
    /// Brand line.
    pub brand: Option<String>,
    /// Price as displayed on the card.
    pub price_text: Option<String>,
    /// Raw `data-price` attribute.
    pub price: String,
    /// `data-gender` attribute.
    pub gender: Option<String>,
    /// `data-family` attribute.
    pub family: Option<String>,
    /// Image source.
    pub image_url: Option<String>,
}

impl ProductCard {
    /// Create a card with a name and raw price.
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    /// Set the element id.
    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Set the `data-id` attribute.
    pub fn with_data_id(mut self, id: impl Into<String>) -> Self {
        self.data_id = Some(id.into());
        self
    }

    /// Set gender and family attributes.
    pub fn with_facets(mut self, gender: impl Into<String>, family: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self.family = Some(family.into());
        self
    }

    /// Set the image source.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Product identity for this card.
    pub fn product_id(&self) -> ProductId {
        derive_product_id(self.element_id.as_deref(), self.data_id.as_deref(), &self.name)
    }

    /// Display name with surrounding whitespace removed.
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }

    /// Unit price parsed from the raw attribute, 0 when malformed.
    pub fn unit_price(&self) -> i64 {
        parse_price(&self.price)
    }

    /// Build the cart input for adding this product.
    pub fn product_input(&self) -> ProductInput {
        ProductInput {
            id: self.product_id(),
            name: self.display_name().to_string(),
            unit_price: self.unit_price(),
            image_url: self.image_url.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_input_from_card() {
        let card = ProductCard::new(" Air Classic ", "150000")
            .with_element_id("shoe-1")
            .with_image("img.jpg");
        let input = card.product_input();

        assert_eq!(input.id.as_str(), "shoe-1");
        assert_eq!(input.name, "Air Classic");
        assert_eq!(input.unit_price, 150000);
        assert_eq!(input.image_url, "img.jpg");
    }

    #[test]
    fn test_card_without_ids_uses_slug() {
        let card = ProductCard::new("Trail Runner", "abc");
        let input = card.product_input();

        assert_eq!(input.id.as_str(), "trail-runner");
        assert_eq!(input.unit_price, 0);
        assert_eq!(input.image_url, "");
    }

    #[test]
    fn test_card_deserializes_with_defaults() {
        let card: ProductCard = serde_json::from_str(
            r#"{"element_id": "shoe-2", "name": "Trail Runner", "price": "200000", "gender": "hombre"}"#,
        )
        .unwrap();
        assert_eq!(card.product_id().as_str(), "shoe-2");
        assert_eq!(card.gender.as_deref(), Some("hombre"));
        assert!(card.family.is_none());
    }
}
