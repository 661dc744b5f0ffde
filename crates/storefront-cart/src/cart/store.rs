//! Cart store and line item types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::CartSnapshot;
use crate::ids::ProductId;
use crate::input::clamp_quantity;
use crate::money::{Currency, Money};

/// The in-memory cart.
///
/// Holds at most one line item per product id, in insertion order. All
/// mutation goes through `add_one`, `add_with_quantity`, and `remove`; none
/// of them can fail. Renderers only ever see a `CartSnapshot`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    items: Vec<LineItem>,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of a product.
    pub fn add_one(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: i64,
        image_url: impl Into<String>,
    ) {
        self.add(id.into(), name.into(), unit_price, image_url.into(), 1);
    }

    /// Add `quantity` units of a product.
    ///
    /// Quantities below 1 are treated as 1.
    pub fn add_with_quantity(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: i64,
        image_url: impl Into<String>,
        quantity: i64,
    ) {
        self.add(
            id.into(),
            name.into(),
            unit_price,
            image_url.into(),
            clamp_quantity(quantity),
        );
    }

    /// Add a product described by a `ProductInput`.
    pub fn add_input(&mut self, input: &ProductInput, quantity: i64) {
        self.add_with_quantity(
            input.id.clone(),
            input.name.clone(),
            input.unit_price,
            input.image_url.clone(),
            quantity,
        );
    }

    fn add(&mut self, id: ProductId, name: String, unit_price: i64, image_url: String, quantity: i64) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            existing.update_total();
            debug!(id = %existing.id, quantity = existing.quantity, "incremented cart line");
            return;
        }

        let unit_price = Money::new(unit_price.max(0), self.currency);
        let item = LineItem::new(id, name, unit_price, image_url, quantity);
        debug!(id = %item.id, quantity = item.quantity, "added cart line");
        self.items.push(item);
    }

    /// Remove a product's line item. Absent ids are ignored.
    pub fn remove(&mut self, id: impl Into<ProductId>) {
        let id = id.into();
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() < len_before {
            debug!(id = %id, "removed cart line");
        }
    }

    /// Take a snapshot of the current contents with fresh totals.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.items.clone(), self.currency)
    }

    /// Get a line item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One product's presence in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identity.
    pub id: ProductId,
    /// Display name, unescaped.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Always `unit_price * quantity`.
    pub line_total: Money,
    /// Image reference for display.
    pub image_url: String,
}

impl LineItem {
    fn new(id: ProductId, name: String, unit_price: Money, image_url: String, quantity: i64) -> Self {
        Self {
            id,
            name,
            unit_price,
            quantity,
            line_total: unit_price.times(quantity),
            image_url,
        }
    }

    fn update_total(&mut self) {
        self.line_total = self.unit_price.times(self.quantity);
    }
}

/// Everything an add action supplies about a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    pub id: ProductId,
    pub name: String,
    pub unit_price: i64,
    pub image_url: String,
}
