//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! viriot cart show [--json]
//! viriot --catalog menu.json cart add <product-id>
//! viriot cart remove <product-id>
//! viriot cart set <product-id> <quantity>
//! viriot cart count
//! ```

use std::io::Write;

use viriot_core::ProductId;
use viriot_storefront::catalog::{Product, find_product};
use viriot_storefront::{CartStorage, CartStore, CartView, FileStorage, StorefrontConfig};

/// Open the cart persisted under the configured directory and key.
pub fn open(config: &StorefrontConfig) -> CartStore<FileStorage> {
    CartStore::open(FileStorage::new(&config.cart.dir), &config.cart.key)
}

/// Print every line, the subtotal and the unit count.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show<S: CartStorage>(
    cart: &CartStore<S>,
    json: bool,
    out: &mut impl Write,
) -> viriot_storefront::Result<()> {
    let view = CartView::from(cart);

    if json {
        serde_json::to_writer_pretty(&mut *out, &view).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    if view.is_empty() {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    }

    for item in &view.items {
        writeln!(
            out,
            "{:>3} x {:<30} {:>9} {:>10}  [{}]",
            item.quantity, item.name, item.price, item.line_price, item.id
        )?;
    }
    writeln!(out, "Total: {} ({} items)", view.subtotal, view.item_count)?;
    Ok(())
}

/// Add one unit of `id` from the catalog.
///
/// # Errors
///
/// Returns an error if the product is not in the catalog or writing fails.
pub fn add<S: CartStorage>(
    cart: &mut CartStore<S>,
    products: &[Product],
    id: &ProductId,
    out: &mut impl Write,
) -> viriot_storefront::Result<()> {
    let product = find_product(products, id)?;
    cart.add_item(product.to_line_item());

    let quantity = cart.get(id).map_or(0, |line| line.quantity);
    writeln!(out, "Added {} (now {quantity} in cart)", product.name)?;
    Ok(())
}

/// Remove the line for `id`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn remove<S: CartStorage>(
    cart: &mut CartStore<S>,
    id: &ProductId,
    out: &mut impl Write,
) -> viriot_storefront::Result<()> {
    let existed = cart.get(id).is_some();
    cart.remove_item(id);

    if existed {
        writeln!(out, "Removed {id}")?;
    } else {
        writeln!(out, "{id} was not in the cart")?;
    }
    Ok(())
}

/// Set the quantity for `id`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn set<S: CartStorage>(
    cart: &mut CartStore<S>,
    id: &ProductId,
    quantity: i64,
    out: &mut impl Write,
) -> viriot_storefront::Result<()> {
    let existed = cart.get(id).is_some();
    cart.update_quantity(id, quantity);

    match (existed, cart.get(id)) {
        (false, _) => writeln!(out, "{id} is not in the cart")?,
        (true, Some(line)) => writeln!(out, "{id} quantity set to {}", line.quantity)?,
        (true, None) => writeln!(out, "Removed {id}")?,
    }
    Ok(())
}

/// Print the unit count (the navigation badge number).
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn count<S: CartStorage>(cart: &CartStore<S>, out: &mut impl Write) -> viriot_storefront::Result<()> {
    writeln!(out, "{}", cart.item_count())?;
    Ok(())
}
