//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_cart::ProductCard;
use storefront_widget::WidgetConfig;

/// Storefront configuration file: widget settings plus the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Widget configuration.
    #[serde(default)]
    pub widget: WidgetConfig,

    /// Product listing, in display order.
    #[serde(default)]
    pub products: Vec<ProductCard>,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text, as JSON when `path` ends in `.json` and TOML otherwise.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront widget configuration

[widget]
locale = "es-CO"
currency = "COP"
scroll_delay_ms = 260
flash_duration_ms = 1600

[[products]]
element_id = "shoe-1"
name = "Air Classic"
brand = "Nike"
price_text = "$ 150.000"
price = "150000"
gender = "hombre"
family = "urbano"
image_url = "img/air-classic.jpg"

[[products]]
element_id = "shoe-2"
name = "Trail Runner"
brand = "Salomon"
price_text = "$ 200.000"
price = "200000"
gender = "mujer"
family = "deportivo"
image_url = "img/trail-runner.jpg"

[[products]]
name = "Sandal"
price_text = "$ 50.000"
price = "50000"
gender = "mujer"
family = "urbano"
"#
    .to_string()
}
