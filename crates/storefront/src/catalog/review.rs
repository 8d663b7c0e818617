//! Review submission rules.
//!
//! A review needs a product, a comment and a rating of one to five stars.
//! The storefront only publishes four and five star reviews.

use thiserror::Error;
use viriot_core::{ProductId, Rating, RatingError};

/// Reasons a review is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// Product id, rating or comment missing.
    #[error("missing required fields")]
    MissingFields,

    /// Rating outside one to five.
    #[error("rating must be between 1 and 5")]
    RatingOutOfRange(#[from] RatingError),

    /// Rating below the publishing threshold.
    #[error("only ratings of {min} stars and above are accepted")]
    RatingTooLow {
        /// Lowest accepted rating.
        min: u8,
    },
}

/// A review as submitted by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Reviewed product.
    pub product_id: ProductId,
    /// Raw star value; `0` means "not chosen".
    pub rating: i64,
    /// Review text.
    pub comment: String,
}

/// A review that passed [`NewReview::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReview {
    /// Reviewed product.
    pub product_id: ProductId,
    /// Accepted star rating (4 or 5).
    pub rating: Rating,
    /// Review text.
    pub comment: String,
}

impl NewReview {
    /// Check the review against the submission rules.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::MissingFields`] if the product id or comment is blank
    ///   or the rating is zero
    /// - [`ReviewError::RatingOutOfRange`] if the rating is not 1..=5
    /// - [`ReviewError::RatingTooLow`] if the rating is below four
    pub fn validate(self) -> Result<ValidatedReview, ReviewError> {
        if self.product_id.as_str().trim().is_empty()
            || self.comment.trim().is_empty()
            || self.rating == 0
        {
            return Err(ReviewError::MissingFields);
        }

        let rating = Rating::try_from(self.rating)?;
        if !rating.is_high() {
            return Err(ReviewError::RatingTooLow {
                min: Rating::HIGH_THRESHOLD,
            });
        }

        Ok(ValidatedReview {
            product_id: self.product_id,
            rating,
            comment: self.comment,
        })
    }
}
