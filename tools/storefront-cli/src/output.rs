//! Output formatting for the CLI.

use console::style;
use storefront_widget::{EffectAction, ModalUpdate, Reaction};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!(
            "{} {}",
            style(format!("[{}/{}]", num, total)).dim(),
            msg
        );
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print what a reaction asks the page to update.
    pub fn reaction(&self, reaction: &Reaction) {
        if self.json {
            self.json(reaction);
            return;
        }

        if let Some(ref view) = reaction.cart {
            self.kv("units", &view.badge);
            self.kv("total", &view.total);
            self.debug(&view.items_html);
        }
        if let Some(ref notice) = reaction.notice {
            for line in notice.lines() {
                println!("  {} {}", style("!").yellow().bold(), line);
            }
        }
        match reaction.modal {
            Some(ModalUpdate::Open { ref html }) => {
                println!("  {}", style("Quick view").bold());
                for line in html.lines() {
                    println!("    {}", style(line.trim()).dim());
                }
            }
            Some(ModalUpdate::Close) => self.debug("modal closed"),
            None => {}
        }
        if let Some(ref visible) = reaction.visibility {
            let shown = visible.iter().filter(|v| **v).count();
            self.kv("visible", &format!("{}/{}", shown, visible.len()));
        }
        for effect in &reaction.scheduled {
            self.debug(&format!("scheduled after {}ms: {}", effect.delay_ms, describe(&effect.action)));
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Human description of a delayed effect.
pub fn describe(action: &EffectAction) -> String {
    match action {
        EffectAction::ScrollAndFlash { target } => format!("scroll to #{} and flash", target),
        EffectAction::Unflash { target } => format!("unflash #{}", target),
    }
}
