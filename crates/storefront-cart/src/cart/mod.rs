//! Shopping cart module.
//!
//! Contains the cart store, its line items, and the snapshot handed to renderers.

mod snapshot;
mod store;

pub use snapshot::CartSnapshot;
pub use store::{CartStore, LineItem, ProductInput};
