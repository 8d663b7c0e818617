//! Product creation rules for the admin form.
//!
//! A new dish needs a name, a description and a price. Names are unique
//! across the catalog. Once the backend assigns an id, the dish's image is
//! served from [`image_path`].

use std::str::FromStr;

use thiserror::Error;
use viriot_core::{Price, PriceError, ProductId};

use super::Product;

/// Reasons a new product is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Name, description or price missing.
    #[error("missing required fields")]
    MissingFields,

    /// Price is not a non-negative amount.
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// Another product already uses this name.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),
}

/// A product as entered in the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Dish name.
    pub name: String,
    /// Menu description.
    pub description: String,
    /// Price as typed, e.g. `12.50` or `$12.50`.
    pub price: String,
}

/// A product that passed [`NewProduct::validate`] and still needs an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProduct {
    /// Trimmed dish name.
    pub name: String,
    /// Trimmed menu description.
    pub description: String,
    /// Parsed unit price.
    pub price: Price,
}

impl NewProduct {
    /// Check the form against the creation rules and the current catalog.
    ///
    /// Surrounding whitespace is trimmed from every field.
    ///
    /// # Errors
    ///
    /// - [`ProductError::MissingFields`] if any field is blank
    /// - [`ProductError::InvalidPrice`] if the price does not parse or is negative
    /// - [`ProductError::AlreadyExists`] if `existing` has a product with the same name
    pub fn validate(self, existing: &[Product]) -> Result<ValidatedProduct, ProductError> {
        let name = self.name.trim();
        let description = self.description.trim();
        let price = self.price.trim();

        if name.is_empty() || description.is_empty() || price.is_empty() {
            return Err(ProductError::MissingFields);
        }

        let price = Price::from_str(price)?;

        if existing.iter().any(|product| product.name == name) {
            return Err(ProductError::AlreadyExists(name.to_owned()));
        }

        Ok(ValidatedProduct {
            name: name.to_owned(),
            description: description.to_owned(),
            price,
        })
    }
}

impl ValidatedProduct {
    /// The catalog entry for this product once it has been assigned `id`.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        let image_url = image_path(&id);
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url,
            reviews: Vec::new(),
        }
    }
}

/// Path the catalog API serves a product's image from.
#[must_use]
pub fn image_path(id: &ProductId) -> String {
    format!("/api/products/{id}/image")
}
