//! Review validation.

use std::io::Write;

use viriot_storefront::catalog::NewReview;

/// Validate `review` and report the outcome.
///
/// # Errors
///
/// Returns the rejection reason if the review breaks a submission rule, or
/// an error if writing to `out` fails.
pub fn check(review: NewReview, out: &mut impl Write) -> viriot_storefront::Result<()> {
    let accepted = review.validate()?;
    tracing::info!(product_id = %accepted.product_id, rating = %accepted.rating, "Review accepted");
    writeln!(
        out,
        "Review for {} accepted ({})",
        accepted.product_id, accepted.rating
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use viriot_storefront::StorefrontError;
    use viriot_storefront::catalog::ReviewError;

    use super::*;

    fn review(rating: i64) -> NewReview {
        NewReview {
            product_id: "a".into(),
            rating,
            comment: "Lovely".to_string(),
        }
    }

    #[test]
    fn test_check_accepts() {
        let mut buf = Vec::new();
        check(review(5), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Review for a accepted (5/5)\n");
    }

    #[test]
    fn test_check_rejects_low_rating() {
        let mut buf = Vec::new();
        let err = check(review(2), &mut buf).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Review(ReviewError::RatingTooLow { min: 4 })
        ));
        assert!(buf.is_empty());
    }
}
