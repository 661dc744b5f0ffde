//! The storefront controller.

use storefront_cart::prelude::*;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::event::{EffectAction, ModalUpdate, Reaction, ScheduledEffect, UiEvent};
use crate::sections::{render_cart, render_quick_view, CartView};
use crate::state::{QuickView, UiState};

/// Owns the cart, the listing, and the UI state of one page view.
///
/// Events are processed one at a time to completion. The cart is only ever
/// mutated here, and each mutation is followed by a render.
pub struct Storefront {
    cart: CartStore,
    catalog: Vec<ProductCard>,
    config: WidgetConfig,
    formatter: Box<dyn CurrencyFormatter>,
    ui: UiState,
}

impl Storefront {
    /// Create a storefront over a listing, formatting with the configured locale.
    pub fn new(catalog: Vec<ProductCard>, config: WidgetConfig) -> Self {
        let formatter = Box::new(config.formatter());
        Self {
            cart: CartStore::new(config.currency),
            ui: UiState::new(catalog.len()),
            catalog,
            config,
            formatter,
        }
    }

    /// Replace the price formatter.
    pub fn with_formatter(mut self, formatter: impl CurrencyFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The product listing.
    pub fn catalog(&self) -> &[ProductCard] {
        &self.catalog
    }

    /// Current UI state.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Widget configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Format an amount with the storefront's formatter.
    pub fn format(&self, money: &Money) -> String {
        format_price(self.formatter.as_ref(), money)
    }

    /// Render the cart from a fresh snapshot.
    pub fn render(&self) -> CartView {
        render_cart(&self.cart.snapshot(), self.formatter.as_ref(), &self.config)
    }

    /// Initial page render.
    pub fn boot(&self) -> Reaction {
        Reaction::render(self.render())
    }

    /// Process one event.
    pub fn dispatch(&mut self, event: UiEvent) -> Reaction {
        debug!(?event, "dispatching ui event");
        match event {
            UiEvent::OpenCart => {
                // Always opens, even when empty.
                let view = self.render();
                self.ui.cart_open = true;
                Reaction::render(view)
            }
            UiEvent::CloseCart => {
                self.ui.cart_open = false;
                Reaction::none()
            }
            UiEvent::AddToCart { product } => match self.find_card(&product) {
                Some(index) => {
                    let input = self.catalog[index].product_input();
                    self.cart.add_input(&input, 1);
                    Reaction::render(self.render())
                }
                None => {
                    debug!(%product, "add for unknown product ignored");
                    Reaction::none()
                }
            },
            UiEvent::QuickView { product } => match self.find_card(&product) {
                Some(index) => {
                    let view = QuickView::from_card(index, &self.catalog[index]);
                    let html = render_quick_view(&view);
                    self.ui.modal = Some(view);
                    Reaction::none().with_modal(ModalUpdate::Open { html })
                }
                None => {
                    debug!(%product, "quick view for unknown product ignored");
                    Reaction::none()
                }
            },
            UiEvent::ModalAdd { quantity } => self.modal_add(&quantity),
            UiEvent::CloseModal => self.close_modal(),
            UiEvent::RemoveItem { id } => {
                self.cart.remove(id);
                Reaction::render(self.render())
            }
            UiEvent::FollowCartLink { href } => self.follow_link(&href),
            UiEvent::FiltersChanged {
                gender,
                family,
                max_price,
            } => {
                let filter = ListingFilter::from_raw(&gender, &family, &max_price);
                self.set_visibility(filter.visibility(&self.catalog))
            }
            UiEvent::ToggleSearch => {
                self.ui.search_visible = !self.ui.search_visible;
                Reaction::none()
            }
            UiEvent::SearchInput { term } => {
                let term = SearchTerm::new(&term);
                self.set_visibility(term.visibility(&self.catalog))
            }
            UiEvent::Escape => {
                if self.ui.modal_open() {
                    self.close_modal()
                } else {
                    self.ui.cart_open = false;
                    Reaction::none()
                }
            }
            UiEvent::Checkout => self.checkout_notice(),
        }
    }

    fn find_card(&self, product: &str) -> Option<usize> {
        self.catalog
            .iter()
            .position(|card| card.product_id().as_str() == product)
    }

    fn modal_add(&mut self, raw_quantity: &str) -> Reaction {
        let Some(view) = self.ui.modal.take() else {
            return Reaction::none();
        };
        let quantity = parse_quantity(raw_quantity);
        let input = self.catalog[view.card_index].product_input();
        self.cart.add_input(&input, quantity);
        Reaction::render(self.render()).with_modal(ModalUpdate::Close)
    }

    fn close_modal(&mut self) -> Reaction {
        match self.ui.modal.take() {
            Some(_) => Reaction::none().with_modal(ModalUpdate::Close),
            None => Reaction::none(),
        }
    }

    fn follow_link(&mut self, href: &str) -> Reaction {
        let Some(target) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return Reaction::none();
        };
        self.ui.cart_open = false;

        let exists = self
            .catalog
            .iter()
            .any(|card| card.element_id.as_deref() == Some(target));
        if !exists {
            debug!(element = target, "cart link target not in listing");
            return Reaction::none();
        }

        Reaction {
            scheduled: vec![
                ScheduledEffect::after(
                    self.config.scroll_delay(),
                    EffectAction::ScrollAndFlash {
                        target: target.to_string(),
                    },
                ),
                ScheduledEffect::after(
                    self.config.unflash_delay(),
                    EffectAction::Unflash {
                        target: target.to_string(),
                    },
                ),
            ],
            ..Default::default()
        }
    }

    fn set_visibility(&mut self, visible: Vec<bool>) -> Reaction {
        self.ui.visible = visible.clone();
        Reaction {
            visibility: Some(visible),
            ..Default::default()
        }
    }

    fn checkout_notice(&self) -> Reaction {
        match checkout(&self.cart.snapshot()) {
            CheckoutOutcome::EmptyCart => Reaction::notice(self.config.empty_checkout_notice.clone()),
            CheckoutOutcome::Ready { total, .. } => Reaction::notice(format!(
                "{}: {}\n{}",
                self.config.checkout_label,
                self.format(&total),
                self.config.checkout_pending_note
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<ProductCard> {
        vec![
            ProductCard::new("Air Classic", "150000")
                .with_element_id("shoe-1")
                .with_facets("hombre", "urbano")
                .with_image("img.jpg"),
            ProductCard::new("Trail Runner", "200000")
                .with_element_id("shoe-2")
                .with_facets("mujer", "deportivo"),
            ProductCard::new("Sandal", "50000").with_facets("mujer", "urbano"),
        ]
    }

    fn storefront() -> Storefront {
        Storefront::new(listing(), WidgetConfig::default())
    }

    fn add(product: &str) -> UiEvent {
        UiEvent::AddToCart {
            product: product.to_string(),
        }
    }

    #[test]
    fn test_boot_renders_empty_cart() {
        let store = storefront();
        let view = store.boot().cart.unwrap();
        assert_eq!(view.badge, "0");
        assert!(view.items_html.contains("cart-empty"));
    }

    #[test]
    fn test_add_renders_but_does_not_open() {
        let mut store = storefront();
        let reaction = store.dispatch(add("shoe-1"));

        let view = reaction.cart.unwrap();
        assert_eq!(view.badge, "1");
        assert_eq!(view.total, "$ 150.000");
        assert!(!store.ui().cart_open);
    }

    #[test]
    fn test_open_cart_even_when_empty() {
        let mut store = storefront();
        let reaction = store.dispatch(UiEvent::OpenCart);
        assert!(reaction.cart.is_some());
        assert!(store.ui().cart_open);
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let mut store = storefront();
        assert!(store.dispatch(add("ghost")).is_empty());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_slug_identity_for_card_without_id() {
        let mut store = storefront();
        store.dispatch(add("sandal"));
        assert!(store.cart().get(&ProductId::new("sandal")).is_some());
    }

    #[test]
    fn test_modal_add_clamps_and_closes() {
        let mut store = storefront();
        store.dispatch(UiEvent::QuickView {
            product: "shoe-2".to_string(),
        });
        assert!(store.ui().modal_open());

        let reaction = store.dispatch(UiEvent::ModalAdd {
            quantity: "-4".to_string(),
        });
        assert_eq!(reaction.modal, Some(ModalUpdate::Close));
        assert_eq!(reaction.cart.unwrap().badge, "1");
        assert!(!store.ui().modal_open());

        store.dispatch(UiEvent::QuickView {
            product: "shoe-2".to_string(),
        });
        store.dispatch(UiEvent::ModalAdd {
            quantity: "3".to_string(),
        });
        let item = store.cart().get(&ProductId::new("shoe-2")).unwrap();
        assert_eq!(item.quantity, 4);
        assert_eq!(item.line_total.amount, 800000);
    }

    #[test]
    fn test_quick_view_fills_modal() {
        let mut store = storefront();
        let reaction = store.dispatch(UiEvent::QuickView {
            product: "shoe-2".to_string(),
        });

        let Some(ModalUpdate::Open { html }) = reaction.modal else {
            panic!("quick view should open the modal");
        };
        assert!(html.contains(r#"<h3 class="modal-title">Trail Runner</h3>"#));
        assert!(reaction.cart.is_none());
        assert_eq!(store.ui().modal.as_ref().unwrap().card_index, 1);

        let reaction = store.dispatch(UiEvent::CloseModal);
        assert_eq!(reaction.modal, Some(ModalUpdate::Close));
        assert!(store.dispatch(UiEvent::CloseModal).is_empty());
    }

    #[test]
    fn test_quick_view_unknown_product_is_ignored() {
        let mut store = storefront();
        let reaction = store.dispatch(UiEvent::QuickView {
            product: "ghost".to_string(),
        });
        assert!(reaction.is_empty());
        assert!(!store.ui().modal_open());
    }

    #[test]
    fn test_modal_add_without_modal_is_ignored() {
        let mut store = storefront();
        let reaction = store.dispatch(UiEvent::ModalAdd {
            quantity: "2".to_string(),
        });
        assert!(reaction.is_empty());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_item_rerenders() {
        let mut store = storefront();
        store.dispatch(add("shoe-1"));
        let reaction = store.dispatch(UiEvent::RemoveItem {
            id: "shoe-1".to_string(),
        });
        assert_eq!(reaction.cart.unwrap().badge, "0");
    }

    #[test]
    fn test_follow_link_schedules_scroll_and_flash() {
        let mut store = storefront();
        store.dispatch(add("shoe-1"));
        store.dispatch(UiEvent::OpenCart);

        let reaction = store.dispatch(UiEvent::FollowCartLink {
            href: "#shoe-1".to_string(),
        });
        assert!(!store.ui().cart_open);
        assert_eq!(
            reaction.scheduled,
            vec![
                ScheduledEffect {
                    delay_ms: 260,
                    action: EffectAction::ScrollAndFlash {
                        target: "shoe-1".to_string()
                    },
                },
                ScheduledEffect {
                    delay_ms: 1860,
                    action: EffectAction::Unflash {
                        target: "shoe-1".to_string()
                    },
                },
            ]
        );
    }

    #[test]
    fn test_follow_link_without_target() {
        let mut store = storefront();
        store.dispatch(UiEvent::OpenCart);

        let reaction = store.dispatch(UiEvent::FollowCartLink {
            href: "#sandal".to_string(),
        });
        assert!(reaction.scheduled.is_empty());
        assert!(!store.ui().cart_open);

        store.dispatch(UiEvent::OpenCart);
        store.dispatch(UiEvent::FollowCartLink {
            href: "https://example.com".to_string(),
        });
        assert!(store.ui().cart_open);
    }

    #[test]
    fn test_filters_then_search() {
        let mut store = storefront();
        let reaction = store.dispatch(UiEvent::FiltersChanged {
            gender: "mujer".to_string(),
            family: String::new(),
            max_price: "100000".to_string(),
        });
        assert_eq!(reaction.visibility, Some(vec![false, false, true]));

        store.dispatch(UiEvent::SearchInput {
            term: "air".to_string(),
        });
        assert_eq!(store.ui().visible, vec![true, false, false]);
    }

    #[test]
    fn test_escape_closes_modal_before_cart() {
        let mut store = storefront();
        store.dispatch(UiEvent::OpenCart);
        store.dispatch(UiEvent::QuickView {
            product: "shoe-1".to_string(),
        });

        let reaction = store.dispatch(UiEvent::Escape);
        assert_eq!(reaction.modal, Some(ModalUpdate::Close));
        assert!(!store.ui().modal_open());
        assert!(store.ui().cart_open);

        store.dispatch(UiEvent::Escape);
        assert!(!store.ui().cart_open);
    }

    #[test]
    fn test_toggle_search() {
        let mut store = storefront();
        store.dispatch(UiEvent::ToggleSearch);
        assert!(store.ui().search_visible);
        store.dispatch(UiEvent::ToggleSearch);
        assert!(!store.ui().search_visible);
    }

    #[test]
    fn test_checkout_notices() {
        let mut store = storefront();
        let reaction = store.dispatch(UiEvent::Checkout);
        assert_eq!(reaction.notice.as_deref(), Some("Tu carrito está vacío."));
        assert!(reaction.cart.is_none());

        store.dispatch(add("shoe-2"));
        let notice = store.dispatch(UiEvent::Checkout).notice.unwrap();
        assert!(notice.starts_with("Total a pagar: $ 200.000"));
    }

    #[test]
    fn test_custom_formatter() {
        let mut store = storefront().with_formatter(LocaleFormatter::new("en-US"));
        let view = store.dispatch(add("shoe-2")).cart.unwrap();
        assert_eq!(view.total, "$200,000");
    }
}
