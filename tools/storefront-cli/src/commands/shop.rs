//! Interactive shopping command.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use storefront_widget::{Storefront, UiEvent};

use super::run::play_effects;
use super::ShopArgs;
use crate::context::Context;

const ACTIONS: [&str; 7] = [
    "Add product",
    "Quick view and add",
    "Remove item",
    "Open cart",
    "Jump to product from cart",
    "Checkout",
    "Quit",
];

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("Interactive shopping does not support --json");
    }
    if ctx.config.products.is_empty() {
        bail!("No products configured. Run `storefront config init` first.");
    }

    let mut store = Storefront::new(ctx.config.products.clone(), ctx.config.widget.clone());
    ctx.output.header("Storefront");
    ctx.output.reaction(&store.boot());

    loop {
        let action = Select::new()
            .with_prompt("What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        let event = match action {
            0 => UiEvent::AddToCart {
                product: pick_product(&store)?,
            },
            1 => {
                let product = pick_product(&store)?;
                ctx.output.reaction(&store.dispatch(UiEvent::QuickView { product }));
                let quantity: String = Input::new()
                    .with_prompt("Quantity")
                    .default("1".to_string())
                    .interact_text()?;
                UiEvent::ModalAdd { quantity }
            }
            2 => match pick_cart_item(&store)? {
                Some(id) => UiEvent::RemoveItem { id },
                None => continue,
            },
            3 => UiEvent::OpenCart,
            4 => match pick_cart_item(&store)? {
                Some(id) => UiEvent::FollowCartLink {
                    href: format!("#{}", id),
                },
                None => continue,
            },
            5 => UiEvent::Checkout,
            _ => break,
        };

        let reaction = store.dispatch(event);
        ctx.output.reaction(&reaction);
        play_effects(&reaction.scheduled, args.no_delay, ctx).await;
    }

    ctx.output.success("Bye");
    Ok(())
}

fn pick_product(store: &Storefront) -> Result<String> {
    let items: Vec<String> = store
        .catalog()
        .iter()
        .map(|card| format!("{} ({})", card.display_name(), card.product_id()))
        .collect();

    let selection = Select::new()
        .with_prompt("Product")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(store.catalog()[selection].product_id().into_inner())
}

fn pick_cart_item(store: &Storefront) -> Result<Option<String>> {
    let snapshot = store.cart().snapshot();
    if snapshot.is_empty() {
        println!("  {}", store.config().empty_cart_message);
        return Ok(None);
    }

    let items: Vec<String> = snapshot
        .items
        .iter()
        .map(|item| format!("{}x {}", item.quantity, item.name))
        .collect();

    let selection = Select::new()
        .with_prompt("Cart item")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(snapshot.items[selection].id.to_string()))
}
