//! Presentation layer for the storefront cart widget.
//!
//! This crate provides:
//! - `WidgetConfig` - Locale, currency, messages, and effect timings
//! - `sections` - Pure HTML renderers for the cart panel, quick view, and footer
//! - `Storefront` - Owns the `CartStore` and UI state, turns `UiEvent`s into `Reaction`s
//!
//! The cart store never touches markup. Every event that mutates the cart
//! comes back with a freshly rendered `CartView`.

pub mod config;
pub mod event;
pub mod sections;
pub mod state;
mod storefront;

pub use config::WidgetConfig;
pub use event::{EffectAction, ModalUpdate, Reaction, ScheduledEffect, UiEvent};
pub use sections::{render_cart, CartView};
pub use state::{QuickView, UiState};
pub use storefront::Storefront;
