//! Client-side shopping cart.
//!
//! [`CartStore`] holds the cart's line items in insertion order and writes a
//! [`snapshot`] of them to a [`CartStorage`](crate::storage::CartStorage)
//! backend after every mutation. [`CartView`] is the display projection used
//! by the cart panel and the navigation badge.

mod line_item;
pub mod snapshot;
mod store;
mod view;

pub use line_item::CartLineItem;
pub use snapshot::SnapshotError;
pub use store::CartStore;
pub use view::{CartItemView, CartView};
