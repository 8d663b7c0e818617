//! Cart snapshots surviving store restarts on disk.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use viriot_core::{Price, ProductId};
use viriot_integration_tests::{line, open_cart, temp_dir};
use viriot_storefront::cart::snapshot;
use viriot_storefront::{CartLineItem, CartStorage, CartStore, FileStorage};

#[test]
fn test_cart_restored_after_restart() {
    let dir = temp_dir();

    let mut cart = open_cart(dir.path());
    cart.add_item(line("a", 1250));
    cart.add_item(line("b", 300));
    cart.add_item(line("a", 1250));
    drop(cart);

    let cart = open_cart(dir.path());
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.get(&"a".into()).unwrap().quantity, 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.subtotal(), Price::from_cents(2800));
    assert!(!cart.is_open());
}

#[test]
fn test_order_preserved_across_restart() {
    let dir = temp_dir();

    let mut cart = open_cart(dir.path());
    for id in ["c", "a", "b"] {
        cart.add_item(line(id, 100));
    }
    drop(cart);

    let ids: Vec<_> = open_cart(dir.path())
        .items()
        .iter()
        .map(|item| item.id.to_string())
        .collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn test_pad_thai_scenario() {
    let dir = temp_dir();
    let pad_thai = || {
        CartLineItem::new(
            "pad-thai",
            "Pad Thai",
            Price::from_cents(1250),
            "/pad-thai.jpg",
            1,
        )
    };

    let mut cart = open_cart(dir.path());
    cart.add_item(pad_thai());
    cart.add_item(pad_thai());
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.subtotal(), Price::from_cents(2500));

    cart.update_quantity(&ProductId::new("pad-thai"), 5);
    drop(cart);

    let mut cart = open_cart(dir.path());
    assert_eq!(cart.item_count(), 5);
    assert_eq!(cart.subtotal(), Price::from_cents(6250));

    cart.update_quantity(&ProductId::new("pad-thai"), 0);
    drop(cart);

    let cart = open_cart(dir.path());
    assert!(cart.is_empty());
    assert_eq!(cart.subtotal(), Price::zero());
}

#[test]
fn test_malformed_file_gives_empty_cart() {
    let dir = temp_dir();
    fs::write(dir.path().join("cart.json"), "{not json").unwrap();

    let mut cart = open_cart(dir.path());
    assert!(cart.is_empty());

    // The next mutation overwrites the bad snapshot.
    cart.add_item(line("a", 100));
    drop(cart);

    let cart = open_cart(dir.path());
    assert_eq!(cart.item_count(), 1);
}

#[test]
fn test_snapshot_on_disk_is_readable_json() {
    let dir = temp_dir();

    let mut cart = open_cart(dir.path());
    cart.add_item(line("a", 1250));
    drop(cart);

    let raw = fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], "a");
    assert_eq!(value[0]["imageUrl"], "/a.jpg");
    assert_eq!(value[0]["quantity"], 1);

    let items = snapshot::decode(&raw).unwrap();
    assert_eq!(items, vec![line("a", 1250)]);
}

#[test]
fn test_separate_keys_are_separate_carts() {
    let dir = temp_dir();

    let mut dinner = CartStore::open(FileStorage::new(dir.path()), "dinner");
    dinner.add_item(line("a", 100));
    drop(dinner);

    let lunch = CartStore::open(FileStorage::new(dir.path()), "lunch");
    assert!(lunch.is_empty());

    let storage = FileStorage::new(dir.path());
    assert!(storage.read("dinner").unwrap().is_some());
    assert!(storage.read("lunch").unwrap().is_none());
}

#[test]
fn test_missing_directory_is_created_on_first_save() {
    let dir = temp_dir();
    let nested = dir.path().join("state").join("carts");

    let mut cart = open_cart(&nested);
    assert!(cart.is_empty());
    cart.add_item(line("a", 100));

    assert!(nested.join("cart.json").exists());
}
