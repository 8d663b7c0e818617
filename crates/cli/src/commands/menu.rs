//! Menu listing.

use std::io::Write;

use viriot_storefront::StorefrontConfig;
use viriot_storefront::catalog::{MenuQuery, Product, filter_and_sort};

/// Print the products matching `query` in display order.
///
/// With `links`, each dish is followed by its image URL resolved against the
/// configured base URL.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(
    products: &[Product],
    query: &MenuQuery,
    links: Option<&StorefrontConfig>,
    out: &mut impl Write,
) -> viriot_storefront::Result<()> {
    let shown = filter_and_sort(products, query);
    tracing::debug!(total = products.len(), shown = shown.len(), sort = %query.sort, "Filtered menu");

    if shown.is_empty() {
        writeln!(out, "No dishes match {:?}", query.search)?;
        return Ok(());
    }

    for product in shown {
        let badge = if product.is_top_rated() { " *Top Rated*" } else { "" };
        writeln!(
            out,
            "{:<12} {:<30} {:>9}  {:.1} ({} reviews){badge}",
            product.id,
            product.name,
            product.price,
            product.average_rating(),
            product.reviews.len(),
        )?;
        if let Some(config) = links {
            writeln!(out, "{:<12} {}", "", config.resolve_url(&product.image_url))?;
        }
    }
    Ok(())
}
