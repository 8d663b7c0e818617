//! Product catalog data.
//!
//! Products and their reviews as served by the catalog API, plus the derived
//! values the menu shows (average rating, "top rated" badge), the
//! conversion used by "add to cart" and the admin product-creation rules.

pub mod menu;
pub mod product;
pub mod review;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use viriot_core::{Price, ProductId, Rating, ReviewId, UserId};

use crate::cart::CartLineItem;

pub use menu::{MenuQuery, MenuSort, filter_and_sort};
pub use product::{NewProduct, ProductError, ValidatedProduct, image_path};
pub use review::{NewReview, ReviewError, ValidatedReview};

/// Errors loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON did not match the expected shape.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// No product with the requested id.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

/// Display name of a review's author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    /// Display name.
    pub name: String,
}

/// A customer review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review id.
    pub id: ReviewId,
    /// Star rating.
    pub rating: Rating,
    /// Review text.
    pub comment: String,
    /// Author's account.
    pub user_id: UserId,
    /// Submission time.
    pub created_at: DateTime<Utc>,
    /// Author details, when the API includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ReviewAuthor>,
}

/// A menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog id.
    pub id: ProductId,
    /// Dish name, unique across the catalog.
    pub name: String,
    /// Menu description. Missing in the JSON reads as empty.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image link, usually relative (`/api/products/{id}/image`).
    pub image_url: String,
    /// Customer reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Mean star rating, or `0.0` with no reviews.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)] // Review counts never approach 2^52
        let count = self.reviews.len() as f64;
        f64::from(self.rating_sum()) / count
    }

    /// Sum of all review ratings.
    #[must_use]
    pub fn rating_sum(&self) -> u32 {
        self.reviews
            .iter()
            .map(|review| u32::from(review.rating.value()))
            .sum()
    }

    /// Whether the product earns the "Top Rated" badge (average of four
    /// stars or more).
    #[must_use]
    pub fn is_top_rated(&self) -> bool {
        self.average_rating() >= f64::from(Rating::HIGH_THRESHOLD)
    }

    /// Reviews of four stars or more.
    pub fn high_rated_reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(|review| review.rating.is_high())
    }

    /// The line item "add to cart" creates for this product.
    #[must_use]
    pub fn to_line_item(&self) -> CartLineItem {
        CartLineItem::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            self.image_url.clone(),
            1,
        )
    }
}

/// Parse a catalog API response (a JSON array of products).
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the JSON does not match.
pub fn load_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    tracing::debug!(products = products.len(), "Loaded catalog");
    Ok(products)
}

/// Find a product by id.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] if no product matches.
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Result<&'a Product, CatalogError> {
    products
        .iter()
        .find(|product| &product.id == id)
        .ok_or_else(|| CatalogError::NotFound(id.clone()))
}
