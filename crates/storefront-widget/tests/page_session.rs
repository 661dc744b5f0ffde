//! A scripted page session, the way the CLI replays one.

use serde::Deserialize;
use storefront_cart::ProductCard;
use storefront_widget::{ModalUpdate, Storefront, UiEvent, WidgetConfig};

#[derive(Deserialize)]
struct Session {
    #[serde(default)]
    widget: WidgetConfig,
    products: Vec<ProductCard>,
    events: Vec<UiEvent>,
}

const SESSION: &str = r##"
[widget]
locale = "es-CO"

[[products]]
element_id = "shoe-1"
name = "Air Classic"
price = "150000"
gender = "hombre"
family = "urbano"
image_url = "img.jpg"

[[products]]
element_id = "shoe-2"
name = "Trail Runner"
price = "200000"
gender = "mujer"
family = "deportivo"

[[events]]
event = "add_to_cart"
product = "shoe-1"

[[events]]
event = "add_to_cart"
product = "shoe-1"

[[events]]
event = "quick_view"
product = "shoe-2"

[[events]]
event = "modal_add"
quantity = "3"

[[events]]
event = "remove_item"
id = "shoe-1"

[[events]]
event = "open_cart"

[[events]]
event = "follow_cart_link"
href = "#shoe-2"
"##;

#[test]
fn replayed_session_matches_expected_cart() {
    let session: Session = toml::from_str(SESSION).unwrap();
    let mut store = Storefront::new(session.products, session.widget);

    let reactions: Vec<_> = session
        .events
        .into_iter()
        .map(|event| store.dispatch(event))
        .collect();

    assert_eq!(reactions[0].cart.as_ref().unwrap().total, "$ 150.000");
    assert_eq!(reactions[1].cart.as_ref().unwrap().total, "$ 300.000");
    match &reactions[2].modal {
        Some(ModalUpdate::Open { html }) => {
            assert!(html.contains(r#"<h3 class="modal-title">Trail Runner</h3>"#))
        }
        other => panic!("expected an open modal, got {:?}", other),
    }
    assert!(reactions[2].cart.is_none());
    assert_eq!(reactions[3].cart.as_ref().unwrap().badge, "5");
    assert_eq!(reactions[3].modal, Some(ModalUpdate::Close));

    let after_remove = reactions[4].cart.as_ref().unwrap();
    assert_eq!(after_remove.badge, "3");
    assert_eq!(after_remove.total, "$ 600.000");
    assert!(!after_remove.items_html.contains("shoe-1"));

    assert_eq!(reactions[6].scheduled.len(), 2);
    assert!(!store.ui().cart_open);

    let snapshot = store.cart().snapshot();
    assert_eq!(snapshot.total_units, 3);
    assert_eq!(snapshot.grand_total.amount, 600000);
}

#[test]
fn empty_checkout_only_shows_notice() {
    let mut store = Storefront::new(Vec::new(), WidgetConfig::default());
    let reaction = store.dispatch(UiEvent::Checkout);

    assert_eq!(reaction.notice.as_deref(), Some("Tu carrito está vacío."));
    assert!(reaction.cart.is_none());
    assert!(reaction.scheduled.is_empty());
    assert!(store.cart().is_empty());
}
