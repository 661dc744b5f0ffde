//! Cart panel section: item rows, unit badge, and total.

use serde::{Deserialize, Serialize};
use storefront_cart::{format_price, CartSnapshot, CurrencyFormatter, LineItem};

use super::html_escape;
use crate::config::WidgetConfig;

/// Everything the page shows for the cart, ready to write into the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    /// Markup for the cart item list.
    pub items_html: String,
    /// Text of the unit-count badge.
    pub badge: String,
    /// Formatted grand total.
    pub total: String,
}

/// Render the whole cart view from a snapshot.
pub fn render_cart(
    snapshot: &CartSnapshot,
    formatter: &dyn CurrencyFormatter,
    config: &WidgetConfig,
) -> CartView {
    CartView {
        items_html: render_cart_items(snapshot, formatter, config),
        badge: snapshot.total_units.to_string(),
        total: format_price(formatter, &snapshot.grand_total),
    }
}

/// Render the list rows of the cart panel.
pub fn render_cart_items(
    snapshot: &CartSnapshot,
    formatter: &dyn CurrencyFormatter,
    config: &WidgetConfig,
) -> String {
    if snapshot.is_empty() {
        return format!(
            r#"<li class="cart-empty">{}</li>"#,
            html_escape(&config.empty_cart_message)
        );
    }

    snapshot
        .items
        .iter()
        .map(|item| render_cart_item(item, formatter, config))
        .collect()
}

fn render_cart_item(item: &LineItem, formatter: &dyn CurrencyFormatter, config: &WidgetConfig) -> String {
    let id = html_escape(item.id.as_str());
    let name = html_escape(&item.name);
    let price = format_price(formatter, &item.line_total);

    format!(
        r##"<li class="cart-item" data-id="{id}">
    <div class="cart-item-left">
        <span class="cart-item-qty">{qty}x</span>
        <a class="cart-item-link" href="#{id}">{name}</a>
    </div>
    <div class="cart-item-right">
        <span class="cart-item-price">{price}</span>
        <button class="cart-item-remove" aria-label="{remove} {name}">✖</button>
    </div>
</li>"##,
        id = id,
        qty = item.quantity,
        name = name,
        price = price,
        remove = html_escape(&config.remove_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_cart::{CartStore, Currency, LocaleFormatter};

    fn render(cart: &CartStore) -> CartView {
        render_cart(&cart.snapshot(), &LocaleFormatter::default(), &WidgetConfig::default())
    }

    #[test]
    fn test_empty_cart_view() {
        let view = render(&CartStore::new(Currency::COP));
        assert_eq!(view.items_html, r#"<li class="cart-empty">Tu carrito está vacío</li>"#);
        assert_eq!(view.badge, "0");
        assert_eq!(view.total, "$ 0");
    }

    #[test]
    fn test_item_rows() {
        let mut cart = CartStore::new(Currency::COP);
        cart.add_with_quantity("shoe-1", "Air Classic", 150000, "img.jpg", 2);
        cart.add_one("shoe-2", "Trail Runner", 200000, "img2.jpg");

        let view = render(&cart);
        assert_eq!(view.items_html.matches(r#"class="cart-item""#).count(), 2);
        assert!(view.items_html.contains(r#"data-id="shoe-1""#));
        assert!(view.items_html.contains(r#"<span class="cart-item-qty">2x</span>"#));
        assert!(view.items_html.contains(r##"href="#shoe-2""##));
        assert!(view.items_html.contains("$ 300.000"));
        assert_eq!(view.badge, "3");
        assert_eq!(view.total, "$ 500.000");
    }

    #[test]
    fn test_names_are_escaped() {
        let mut cart = CartStore::new(Currency::COP);
        cart.add_one("x", "<script>alert('x')</script>", 1, "");

        let view = render(&cart);
        assert!(!view.items_html.contains("<script>"));
        assert!(view.items_html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(view.items_html.contains(r#"aria-label="Eliminar &lt;script&gt;"#));
    }

    #[test]
    fn test_formatter_fallback() {
        let mut cart = CartStore::new(Currency::COP);
        cart.add_one("shoe-1", "Air Classic", 150000, "img.jpg");

        let view = render_cart(
            &cart.snapshot(),
            &LocaleFormatter::new("zz-ZZ"),
            &WidgetConfig::default(),
        );
        assert_eq!(view.total, "COP $150000");
    }
}
