//! Session replay command.

use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use storefront_widget::{ScheduledEffect, Storefront, UiEvent};

use super::RunArgs;
use crate::context::Context;
use crate::output::describe;

/// A scripted session.
#[derive(Debug, Deserialize)]
pub struct Script {
    /// Events in the order they happen.
    pub events: Vec<UiEvent>,
}

impl Script {
    /// Parse a script, as JSON when `path` ends in `.json` and TOML otherwise.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON script: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML script: {}", path))
        }
    }
}

/// Run the run command.
pub async fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    let script = Script::parse(&args.script, &content)?;

    let mut store = Storefront::new(ctx.config.products.clone(), ctx.config.widget.clone());
    ctx.output.header(&format!("Replaying {} event(s)", script.events.len()));
    ctx.output.reaction(&store.boot());

    let total = script.events.len();
    for (i, event) in script.events.into_iter().enumerate() {
        ctx.output.step(i + 1, total, &format!("{:?}", event));
        let reaction = store.dispatch(event);
        ctx.output.reaction(&reaction);
        play_effects(&reaction.scheduled, args.no_delay, ctx).await;
    }

    let snapshot = store.cart().snapshot();
    ctx.output.success(&format!(
        "Cart holds {} unit(s), total {}",
        snapshot.total_units,
        store.format(&snapshot.grand_total)
    ));
    Ok(())
}

/// Run delayed effects in order, waiting out each delay unless `no_delay`.
pub async fn play_effects(effects: &[ScheduledEffect], no_delay: bool, ctx: &Context) {
    let mut pending: Vec<&ScheduledEffect> = effects.iter().collect();
    pending.sort_by_key(|e| e.delay_ms);

    let mut elapsed = Duration::ZERO;
    for effect in pending {
        if !no_delay {
            tokio::time::sleep(effect.delay().saturating_sub(elapsed)).await;
            elapsed = effect.delay();
        }
        ctx.output.info(&describe(&effect.action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_script() {
        let script = Script::parse(
            "session.toml",
            r##"
[[events]]
event = "add_to_cart"
product = "shoe-1"

[[events]]
event = "follow_cart_link"
href = "#shoe-1"

[[events]]
event = "checkout"
"##,
        )
        .unwrap();
        assert_eq!(script.events.len(), 3);
        assert_eq!(script.events[2], UiEvent::Checkout);
    }

    #[test]
    fn test_parse_json_script() {
        let script = Script::parse(
            "session.json",
            r#"{"events": [{"event": "modal_add", "quantity": "2"}]}"#,
        )
        .unwrap();
        assert_eq!(
            script.events,
            vec![UiEvent::ModalAdd {
                quantity: "2".to_string()
            }]
        );
    }

    #[test]
    fn test_demo_session_against_sample_config() {
        let config = crate::config::StorefrontConfig::parse(
            "storefront.toml",
            &crate::config::generate_default_config(),
        )
        .unwrap();
        let script =
            Script::parse("session.toml", include_str!("../../demos/session.toml")).unwrap();

        let mut store = Storefront::new(config.products, config.widget);
        let reactions: Vec<_> = script
            .events
            .into_iter()
            .map(|event| store.dispatch(event))
            .collect();

        let last = reactions.last().unwrap();
        assert_eq!(
            last.notice.as_deref(),
            Some("Total a pagar: $ 600.000\n(Implementar flujo de pago más adelante)")
        );
        assert_eq!(store.ui().visible, vec![false, false, true]);
    }

    #[test]
    fn test_unknown_event_fails() {
        assert!(Script::parse("s.json", r#"{"events": [{"event": "teleport"}]}"#).is_err());
    }
}
