//! Integration tests for the Viriot storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p viriot-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart snapshots surviving store restarts on disk
//! - `catalog_to_cart` - Menu browsing feeding the cart
//!
//! This library holds the shared fixtures.

use std::path::Path;

use tempfile::TempDir;
use viriot_core::Price;
use viriot_storefront::catalog::{Product, load_catalog};
use viriot_storefront::storage::keys;
use viriot_storefront::{CartLineItem, CartStore, FileStorage};

/// Catalog API response used across tests.
pub const CATALOG_JSON: &str = r#"[
    {
        "id": "pad-thai",
        "name": "Pad Thai",
        "description": "Rice noodles, tamarind, peanuts",
        "price": 12.5,
        "imageUrl": "/api/products/pad-thai/image",
        "reviews": [
            {"id": "r1", "rating": 5, "comment": "Perfect", "userId": "u1",
             "createdAt": "2024-05-01T12:00:00.000Z", "user": {"name": "Sam"}},
            {"id": "r2", "rating": 4, "comment": "Good", "userId": "u2",
             "createdAt": "2024-05-02T12:00:00.000Z"}
        ]
    },
    {
        "id": "green-curry",
        "name": "Green Curry",
        "description": "Coconut milk, thai basil",
        "price": "14.00",
        "imageUrl": "/api/products/green-curry/image",
        "reviews": []
    },
    {
        "id": "mango-sticky-rice",
        "name": "Mango Sticky Rice",
        "description": "Sweet coconut rice",
        "price": 7,
        "imageUrl": "/api/products/mango-sticky-rice/image"
    }
]"#;

/// Parse [`CATALOG_JSON`].
///
/// # Panics
///
/// Panics if the fixture does not parse.
#[must_use]
pub fn catalog() -> Vec<Product> {
    load_catalog(CATALOG_JSON).unwrap_or_else(|e| panic!("fixture catalog: {e}"))
}

/// A fresh temporary directory for file-backed storage.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"))
}

/// Open the cart stored under `dir` with the default key.
#[must_use]
pub fn open_cart(dir: &Path) -> CartStore<FileStorage> {
    CartStore::open(FileStorage::new(dir), keys::CART)
}

/// A line item with the given id and price in cents.
#[must_use]
pub fn line(id: &str, cents: u32) -> CartLineItem {
    CartLineItem::new(id, format!("Dish {id}"), Price::from_cents(cents), format!("/{id}.jpg"), 1)
}
