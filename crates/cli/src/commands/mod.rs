//! CLI command implementations.
//!
//! Each command writes its human-readable output to the writer it is given,
//! so the commands can be exercised against an in-memory buffer.

pub mod cart;
pub mod menu;
pub mod product;
pub mod review;

use viriot_storefront::StorefrontConfig;
use viriot_storefront::catalog::{self, Product};

/// Read and parse the configured catalog file.
///
/// # Errors
///
/// Returns an error if no catalog is configured, the file cannot be read, or
/// its contents are not a product list.
pub fn load_catalog(config: &StorefrontConfig) -> viriot_storefront::Result<Vec<Product>> {
    let path = config.require_catalog_path()?;
    tracing::debug!(path = %path.display(), "Reading catalog");
    let raw = std::fs::read_to_string(path)?;
    Ok(catalog::load_catalog(&raw)?)
}
