//! Cart line items.

use serde::{Deserialize, Serialize};
use viriot_core::{Price, ProductId};

/// One product entry in the cart with its quantity.
///
/// Field names serialize in camelCase (`imageUrl`) so persisted snapshots
/// keep the record shape front ends already read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product this line refers to. Unique within a cart.
    pub id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub price: Price,
    /// Image shown next to the line.
    pub image_url: String,
    /// Number of units, at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line item.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: image_url.into(),
            quantity,
        }
    }

    /// Price of the whole line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartLineItem::new("a", "Pad Thai", Price::from_cents(1250), "/a.jpg", 3);
        assert_eq!(item.line_total(), Price::from_cents(3750));
    }

    #[test]
    fn test_serializes_camel_case() {
        let item = CartLineItem::new("a", "Pad Thai", Price::from_cents(1250), "/a.jpg", 1);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["imageUrl"], "/a.jpg");
        assert_eq!(value["id"], "a");
        assert_eq!(value["quantity"], 1);
        assert!(value.get("image_url").is_none());
    }
}
