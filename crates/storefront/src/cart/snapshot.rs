//! Cart snapshot encoding.
//!
//! A snapshot is a JSON array of [`CartLineItem`] records in cart order:
//!
//! ```json
//! [{"id":"a","name":"Pad Thai","price":"12.5","imageUrl":"/a.jpg","quantity":2}]
//! ```
//!
//! Prices may also appear as plain JSON numbers. Decoding is strict: a
//! snapshot that breaks any cart invariant is rejected as a whole.

use std::collections::HashSet;

use thiserror::Error;
use viriot_core::ProductId;

use super::CartLineItem;

/// Why a stored snapshot could not be used.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Not a JSON array of line items.
    #[error("snapshot is not a list of line items: {0}")]
    Parse(#[from] serde_json::Error),

    /// A line item has a quantity below one.
    #[error("line item {0} has quantity 0")]
    ZeroQuantity(ProductId),

    /// Two line items share an id.
    #[error("duplicate line item {0}")]
    DuplicateId(ProductId),
}

/// Serialize line items to snapshot text.
///
/// # Errors
///
/// Returns [`SnapshotError::Parse`] if serialization fails.
pub fn encode(items: &[CartLineItem]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(items)?)
}

/// Parse snapshot text back into line items, preserving order.
///
/// # Errors
///
/// Returns [`SnapshotError`] if the text is not a JSON array of line items,
/// a quantity is zero, or an id repeats. Negative prices fail in parsing.
pub fn decode(snapshot: &str) -> Result<Vec<CartLineItem>, SnapshotError> {
    let items: Vec<CartLineItem> = serde_json::from_str(snapshot)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.quantity == 0 {
            return Err(SnapshotError::ZeroQuantity(item.id.clone()));
        }
        if !seen.insert(&item.id) {
            return Err(SnapshotError::DuplicateId(item.id.clone()));
        }
    }

    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use viriot_core::Price;

    use super::*;

    fn pad_thai() -> CartLineItem {
        CartLineItem::new("a", "Pad Thai", Price::from_cents(1250), "/a.jpg", 2)
    }

    #[test]
    fn test_encode_then_decode_preserves_order() {
        let items = vec![
            pad_thai(),
            CartLineItem::new("b", "Green Curry", Price::from_cents(1400), "/b.jpg", 1),
        ];
        let decoded = decode(&encode(&items).unwrap()).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn test_decode_numeric_prices() {
        let raw = json!([
            {"id": "a", "name": "Pad Thai", "price": 12.5, "imageUrl": "/a.jpg", "quantity": 2}
        ])
        .to_string();
        assert_eq!(decode(&raw).unwrap(), vec![pad_thai()]);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(decode("{\"id\":\"a\"}"), Err(SnapshotError::Parse(_))));
        assert!(matches!(decode("not json"), Err(SnapshotError::Parse(_))));
        assert!(matches!(decode("null"), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let raw = json!([{"id": "a", "quantity": 1}]).to_string();
        assert!(matches!(decode(&raw), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn test_decode_rejects_negative_price() {
        let raw = json!([
            {"id": "a", "name": "x", "price": -1, "imageUrl": "", "quantity": 1}
        ])
        .to_string();
        assert!(matches!(decode(&raw), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn test_decode_rejects_zero_quantity() {
        let raw = json!([
            {"id": "a", "name": "x", "price": 1, "imageUrl": "", "quantity": 0}
        ])
        .to_string();
        assert!(matches!(decode(&raw), Err(SnapshotError::ZeroQuantity(_))));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let raw = json!([
            {"id": "a", "name": "x", "price": 1, "imageUrl": "", "quantity": 1},
            {"id": "a", "name": "x", "price": 1, "imageUrl": "", "quantity": 2}
        ])
        .to_string();
        assert!(matches!(decode(&raw), Err(SnapshotError::DuplicateId(_))));
    }
}
