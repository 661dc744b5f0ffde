//! In-memory shopping cart state for a storefront page.
//!
//! This crate holds everything the storefront widget needs that is not markup:
//!
//! - **Cart**: `CartStore` with add/remove operations and fresh `CartSnapshot`s
//! - **Money**: currency amounts and locale-aware price formatting with fallback
//! - **Catalog**: product cards from the listing and identity derivation
//! - **Search**: listing filters and name search
//! - **Checkout**: the empty-cart guard in front of the (unimplemented) payment flow
//!
//! # Example
//!
//! ```rust
//! use storefront_cart::prelude::*;
//!
//! let mut cart = CartStore::new(Currency::COP);
//! cart.add_one("shoe-1", "Air Classic", 150_000, "img.jpg");
//! cart.add_with_quantity("shoe-2", "Trail Runner", 200_000, "img2.jpg", 3);
//!
//! let snapshot = cart.snapshot();
//! assert_eq!(snapshot.total_units, 4);
//! assert_eq!(snapshot.grand_total.amount, 750_000);
//! ```

pub mod error;
pub mod ids;
pub mod input;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use cart::{CartSnapshot, CartStore, LineItem, ProductInput};
pub use catalog::ProductCard;
pub use checkout::{checkout, CheckoutOutcome};
pub use error::{FormatError, ParseError};
pub use ids::{derive_product_id, slugify, ProductId};
pub use money::{format_price, Currency, CurrencyFormatter, LocaleFormatter, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{FormatError, ParseError};
    pub use crate::ids::{derive_product_id, slugify, ProductId};
    pub use crate::input::{clamp_quantity, parse_price, parse_quantity};
    pub use crate::money::{format_price, Currency, CurrencyFormatter, LocaleFormatter, Money};

    // Cart
    pub use crate::cart::{CartSnapshot, CartStore, LineItem, ProductInput};

    // Catalog
    pub use crate::catalog::ProductCard;

    // Checkout
    pub use crate::checkout::{checkout, CheckoutOutcome};

    // Search
    pub use crate::search::{ListingFilter, SearchTerm};
}
