//! Widget configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_cart::{Currency, LocaleFormatter};

/// Configuration for the storefront widget.
///
/// Every field has a default, so a partial `[widget]` table is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Locale used to format prices.
    pub locale: String,

    /// Currency of every price in the catalog.
    pub currency: Currency,

    /// Text of the cart panel's empty row.
    pub empty_cart_message: String,

    /// Notice shown when checkout is pressed on an empty cart.
    pub empty_checkout_notice: String,

    /// Label before the amount in the checkout summary.
    pub checkout_label: String,

    /// Line appended to the checkout summary while payment is pending.
    pub checkout_pending_note: String,

    /// Accessible label prefix of the remove button.
    pub remove_label: String,

    /// Delay between closing the cart and scrolling to a linked product.
    pub scroll_delay_ms: u64,

    /// How long a linked product stays highlighted.
    pub flash_duration_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            locale: "es-CO".to_string(),
            currency: Currency::COP,
            empty_cart_message: "Tu carrito está vacío".to_string(),
            empty_checkout_notice: "Tu carrito está vacío.".to_string(),
            checkout_label: "Total a pagar".to_string(),
            checkout_pending_note: "(Implementar flujo de pago más adelante)".to_string(),
            remove_label: "Eliminar".to_string(),
            scroll_delay_ms: 260,
            flash_duration_ms: 1600,
        }
    }
}

impl WidgetConfig {
    /// Price formatter for the configured locale.
    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::new(self.locale.clone())
    }

    /// Delay before scrolling to a linked product.
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    /// Delay, from the link click, before the highlight is removed.
    pub fn unflash_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms.saturating_add(self.flash_duration_ms))
    }
}
