//! Configuration management commands.

use std::collections::HashSet;

use anyhow::{bail, Result};
use storefront_cart::input::parse_int;
use storefront_cart::{CurrencyFormatter, Money};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let widget = &ctx.config.widget;
    ctx.output.info("[widget]");
    ctx.output.kv("locale", &widget.locale);
    ctx.output.kv("currency", widget.currency.code());
    ctx.output.kv("scroll_delay_ms", &widget.scroll_delay_ms.to_string());
    ctx.output.kv("flash_duration_ms", &widget.flash_duration_ms.to_string());

    ctx.output.info("");
    ctx.output.info(&format!("[[products]] ({})", ctx.config.products.len()));
    for card in &ctx.config.products {
        ctx.output.kv(card.product_id().as_str(), card.display_name());
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path("storefront.toml");

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    let problems = config_problems(&ctx.config);

    if problems.is_empty() {
        ctx.output.success(&format!(
            "Config is valid ({} product(s))",
            ctx.config.products.len()
        ));
        return Ok(());
    }

    for problem in &problems {
        ctx.output.warn(problem);
    }
    bail!("{} problem(s) found", problems.len())
}

fn config_problems(config: &StorefrontConfig) -> Vec<String> {
    let mut problems = Vec::new();

    let widget = &config.widget;
    if let Err(e) = widget.formatter().format(&Money::zero(widget.currency)) {
        problems.push(format!("{} (prices will use the plain fallback)", e));
    }

    let mut seen = HashSet::new();
    for card in &config.products {
        let id = card.product_id();
        if parse_int(&card.price).is_err() {
            problems.push(format!("Product {} has no numeric price; it will cost 0", id));
        } else if Money::new(card.unit_price(), widget.currency).is_zero() {
            problems.push(format!("Product {} costs 0", id));
        }
        if !seen.insert(id.clone()) {
            problems.push(format!("Duplicate product id: {}", id));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_problems() {
        let config = StorefrontConfig::parse("storefront.toml", &generate_default_config()).unwrap();
        assert!(config_problems(&config).is_empty());
    }

    #[test]
    fn test_problems_are_reported() {
        let config = StorefrontConfig::parse(
            "storefront.toml",
            r#"
[widget]
locale = "fr-FR"

[[products]]
name = "Boot"
price = "abc"

[[products]]
name = "Boot"
price = "0"
"#,
        )
        .unwrap();

        let problems = config_problems(&config);
        assert_eq!(problems.len(), 4);
        assert!(problems[1].contains("no numeric price"));
        assert_eq!(problems[2], "Product boot costs 0");
        assert_eq!(problems[3], "Duplicate product id: boot");
    }
}
