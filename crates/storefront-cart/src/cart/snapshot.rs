//! Read-only projection of the cart with aggregate totals.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::money::{Currency, Money};

/// Cart contents plus totals, as handed to renderers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Sum of all quantities.
    pub total_units: i64,
    /// Sum of all line totals.
    pub grand_total: Money,
}

impl CartSnapshot {
    pub(crate) fn new(items: Vec<LineItem>, currency: Currency) -> Self {
        let total_units = items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity));
        let grand_total = Money::sum(items.iter().map(|i| &i.line_total), currency);
        Self {
            items,
            total_units,
            grand_total,
        }
    }

    /// Check if the snapshot has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
