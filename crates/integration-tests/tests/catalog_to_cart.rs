//! Menu browsing feeding the cart.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use viriot_core::{Price, ProductId};
use viriot_integration_tests::{catalog, open_cart, temp_dir};
use viriot_storefront::CartView;
use viriot_storefront::catalog::{
    MenuQuery, MenuSort, NewProduct, NewReview, ProductError, filter_and_sort, find_product,
};

#[test]
fn test_catalog_prices_accept_numbers_and_strings() {
    let products = catalog();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].price, Price::from_cents(1250));
    assert_eq!(products[1].price, Price::from_cents(1400));
    assert_eq!(products[2].price, Price::from_cents(700));
    assert!(products[2].reviews.is_empty());
}

#[test]
fn test_menu_then_add_to_cart() {
    let products = catalog();
    let dir = temp_dir();
    let mut cart = open_cart(dir.path());

    let query = MenuQuery::search("coconut").sorted_by(MenuSort::PriceAsc);
    let matches = filter_and_sort(&products, &query);
    let names: Vec<_> = matches.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Mango Sticky Rice", "Green Curry"]);

    for product in &matches {
        cart.add_item(product.to_line_item());
    }
    cart.add_item(find_product(&products, &ProductId::new("pad-thai")).unwrap().to_line_item());
    drop(cart);

    let cart = open_cart(dir.path());
    let view = CartView::from(&cart);
    assert_eq!(view.item_count, 3);
    assert_eq!(view.subtotal, "$33.50");
    assert_eq!(view.items[0].name, "Mango Sticky Rice");
    assert_eq!(view.items[2].image_url, "/api/products/pad-thai/image");
}

#[test]
fn test_top_rated_badge_and_rating_sort() {
    let products = catalog();
    let pad_thai = &products[0];

    assert!((pad_thai.average_rating() - 4.5).abs() < f64::EPSILON);
    assert!(pad_thai.is_top_rated());
    assert_eq!(pad_thai.high_rated_reviews().count(), 2);
    assert!(!products[1].is_top_rated());

    let ranked = filter_and_sort(&products, &MenuQuery::default());
    assert_eq!(ranked[0].id, ProductId::new("pad-thai"));
}

#[test]
fn test_review_for_catalog_product() {
    let products = catalog();
    let product = &products[1];

    let accepted = NewReview {
        product_id: product.id.clone(),
        rating: 5,
        comment: "Rich and fragrant".to_string(),
    }
    .validate();
    assert!(accepted.is_ok());

    let rejected = NewReview {
        product_id: product.id.clone(),
        rating: 3,
        comment: "Fine".to_string(),
    }
    .validate();
    assert!(rejected.is_err());
}

#[test]
fn test_created_product_joins_menu_and_cart() {
    let mut products = catalog();

    let duplicate = NewProduct {
        name: "Green Curry".to_string(),
        description: "Again".to_string(),
        price: "14".to_string(),
    }
    .validate(&products);
    assert!(matches!(duplicate, Err(ProductError::AlreadyExists(_))));

    let created = NewProduct {
        name: "Larb".to_string(),
        description: "Minced pork salad".to_string(),
        price: "9.75".to_string(),
    }
    .validate(&products)
    .unwrap()
    .into_product(ProductId::new("larb"));
    products.push(created);

    let query = MenuQuery::search("larb");
    let found = filter_and_sort(&products, &query);
    assert_eq!(found.len(), 1);

    let dir = temp_dir();
    let mut cart = open_cart(dir.path());
    cart.add_item(found[0].to_line_item());
    drop(cart);

    let cart = open_cart(dir.path());
    let line = cart.get(&ProductId::new("larb")).unwrap();
    assert_eq!(line.image_url, "/api/products/larb/image");
    assert_eq!(cart.subtotal(), Price::from_cents(975));
}
