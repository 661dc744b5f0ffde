//! Checkout guard.
//!
//! Payment is not implemented. Checkout only decides between the empty-cart
//! notice and a summary of what would be paid.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::CartSnapshot;
use crate::money::Money;

/// Result of pressing the checkout button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Nothing to pay for; show the empty-cart notice.
    EmptyCart,
    /// The cart has items; show the amount due.
    Ready { total: Money, units: i64 },
}

/// Decide the checkout outcome for a snapshot.
pub fn checkout(snapshot: &CartSnapshot) -> CheckoutOutcome {
    if snapshot.is_empty() {
        info!("checkout blocked: cart is empty");
        return CheckoutOutcome::EmptyCart;
    }

    CheckoutOutcome::Ready {
        total: snapshot.grand_total,
        units: snapshot.total_units,
    }
}
