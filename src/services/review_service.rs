use chrono::Local;
use uuid::Uuid;

use crate::{
    dto::reviews::NewReviewRequest,
    error::{AppError, AppResult},
    models::Review,
    state::Storefront,
    store::KeyValueStore,
};

/// Prepends a review to the product's collection (newest first).
///
/// Requires a signed-in author and a non-blank comment; the rating is
/// re-validated here rather than trusting the input form. An unknown product
/// id is a no-op, reported as `Ok(None)`.
pub fn add_review<S: KeyValueStore>(
    app: &mut Storefront<S>,
    product_id: Uuid,
    payload: NewReviewRequest,
) -> AppResult<Option<Review>> {
    let Some(author) = app.user.clone() else {
        return Err(AppError::SignInRequired);
    };
    if payload.comment.trim().is_empty() {
        return Err(AppError::BadRequest("comment must not be empty".to_string()));
    }
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::BadRequest(
            "rating must be between 1 and 5".to_string(),
        ));
    }

    let Some(product) = app.products.iter_mut().find(|p| p.id == product_id) else {
        return Ok(None);
    };

    let now = Local::now();
    let review = Review {
        id: now.timestamp_millis(),
        user_name: author
            .email
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string(),
        user_id: author.email,
        rating: payload.rating,
        comment: payload.comment,
        date: now.format("%-m/%-d/%Y").to_string(),
    };
    product.reviews.insert(0, review.clone());
    app.persist_products();
    tracing::debug!(product_id = %product_id, rating = review.rating, "review added");
    Ok(Some(review))
}
