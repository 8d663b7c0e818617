//! Cart display data for UI layers.

use serde::Serialize;

use super::{CartLineItem, CartStore};
use crate::storage::CartStorage;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    /// Product id.
    pub id: String,
    /// Dish name.
    pub name: String,
    /// Image link as stored on the line.
    pub image_url: String,
    /// Units on this line.
    pub quantity: u32,
    /// Formatted unit price, e.g. `$12.50`.
    pub price: String,
    /// Formatted line price (unit price times quantity).
    pub line_price: String,
    /// Whether the "minus" control is enabled. Quantity never drops below one
    /// through it; removal has its own control.
    pub can_decrement: bool,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Lines in cart order.
    pub items: Vec<CartItemView>,
    /// Formatted subtotal, e.g. `$25.00`.
    pub subtotal: String,
    /// Total units (the navigation badge).
    pub item_count: u64,
    /// Whether the cart panel is shown.
    pub is_open: bool,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
            is_open: false,
        }
    }

    /// Whether the cart has nothing to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartLineItem> for CartItemView {
    fn from(item: &CartLineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            line_price: item.line_total().to_string(),
            can_decrement: item.quantity > 1,
        }
    }
}

impl<S: CartStorage> From<&CartStore<S>> for CartView {
    fn from(cart: &CartStore<S>) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
            is_open: cart.is_open(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use viriot_core::Price;

    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_empty_view() {
        let cart = CartStore::open(MemoryStorage::new(), "cart");
        let view = CartView::from(&cart);
        assert_eq!(view, CartView::empty());
        assert!(view.is_empty());
    }

    #[test]
    fn test_view_formats_prices() {
        let mut cart = CartStore::open(MemoryStorage::new(), "cart");
        cart.add_item(CartLineItem::new("a", "Pad Thai", Price::from_cents(1250), "/a.jpg", 1));
        cart.add_item(CartLineItem::new("a", "Pad Thai", Price::from_cents(1250), "/a.jpg", 1));
        cart.add_item(CartLineItem::new("b", "Spring Rolls", Price::from_cents(600), "/b.jpg", 1));
        cart.set_open(true);

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$31.00");
        assert!(view.is_open);

        let first = view.items.first().unwrap();
        assert_eq!(first.price, "$12.50");
        assert_eq!(first.line_price, "$25.00");
        assert!(first.can_decrement);

        let second = view.items.get(1).unwrap();
        assert_eq!(second.name, "Spring Rolls");
        assert!(!second.can_decrement);
    }
}
