//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod run;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show products for this gender.
    #[arg(long, default_value = "")]
    pub gender: String,

    /// Only show products in this family.
    #[arg(long, default_value = "")]
    pub family: String,

    /// Only show products at or below this price.
    #[arg(long, default_value = "")]
    pub max_price: String,

    /// Only show products whose name contains this text. Replaces the filters, as on the page.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Session script (TOML or JSON) with an `events` list.
    pub script: String,

    /// Run scheduled effects immediately instead of waiting.
    #[arg(long)]
    pub no_delay: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Skip scheduled effect delays.
    #[arg(long)]
    pub no_delay: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
