//! Product creation checks.

use std::io::Write;

use viriot_storefront::catalog::{NewProduct, Product};

/// Validate `product` against the creation rules and the current catalog.
///
/// # Errors
///
/// Returns the rejection reason if the product breaks a creation rule, or
/// an error if writing to `out` fails.
pub fn check(
    product: NewProduct,
    products: &[Product],
    out: &mut impl Write,
) -> viriot_storefront::Result<()> {
    let accepted = product.validate(products)?;
    tracing::info!(name = %accepted.name, price = %accepted.price, "Product accepted");
    writeln!(out, "Product {} accepted ({})", accepted.name, accepted.price)?;
    Ok(())
}
