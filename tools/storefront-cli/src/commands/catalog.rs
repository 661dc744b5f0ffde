//! Catalog listing command.

use anyhow::Result;
use serde::Serialize;
use storefront_cart::search::{ListingFilter, SearchTerm};
use storefront_cart::{format_price, Money};
use storefront_widget::sections::{current_year, render_footer_year};

use super::CatalogArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CatalogRow {
    id: String,
    name: String,
    price: i64,
    visible: bool,
}

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let products = &ctx.config.products;
    let widget = &ctx.config.widget;

    let visible = match args.search {
        Some(ref term) => SearchTerm::new(term).visibility(products),
        None => ListingFilter::from_raw(&args.gender, &args.family, &args.max_price)
            .visibility(products),
    };

    let rows: Vec<CatalogRow> = products
        .iter()
        .zip(visible)
        .map(|(card, visible)| CatalogRow {
            id: card.product_id().into_inner(),
            name: card.display_name().to_string(),
            price: card.unit_price(),
            visible,
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Catalog");
    if rows.is_empty() {
        ctx.output.info("No products configured.");
        ctx.output.info("Run `storefront config init` to create a sample catalog.");
        return Ok(());
    }

    let formatter = widget.formatter();
    let widths = [16, 24, 14];
    ctx.output.table_row(&["ID", "NAME", "PRICE"], &widths);
    for row in rows.iter().filter(|r| r.visible) {
        let price = format_price(&formatter, &Money::new(row.price, widget.currency));
        ctx.output.table_row(&[row.id.as_str(), row.name.as_str(), price.as_str()], &widths);
    }

    let hidden = rows.iter().filter(|r| !r.visible).count();
    if hidden > 0 {
        ctx.output.info(&format!("{} product(s) hidden by filters", hidden));
    }
    ctx.output.debug(&render_footer_year(current_year()));

    Ok(())
}
