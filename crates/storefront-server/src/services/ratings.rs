//! Product ratings: submit, update, list.
//!
//! The duplicate check, the rating write, and the aggregate recompute run
//! inside the store's product-scoped critical section; this module only
//! gates and delegates.

use serde::Deserialize;

use storefront_core::error::Result;
use storefront_core::model::{Principal, Rating};
use storefront_core::policy::{decide, require_owner_or_staff, OperationClass};

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub value: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRatingRequest {
    pub value: Option<u8>,
    pub comment: Option<String>,
}

/// Public: anyone can read a product's ratings.
pub fn list_for_product(state: &AppState, product_id: u64) -> Result<Vec<Rating>> {
    state.store().ratings_for_product(product_id)
}

pub fn my_ratings(state: &AppState, actor: &Principal) -> Vec<Rating> {
    state.store().ratings_by_owner(actor.id)
}

/// First submission for (actor, product). A duplicate is rejected with a
/// conflict, never overwritten; the caller must use the update operation.
pub fn submit(
    state: &AppState,
    actor: &Principal,
    product_id: u64,
    req: RateRequest,
) -> Result<Rating> {
    decide(OperationClass::Create, Some(actor), None).require("rating")?;
    let rating = state
        .store()
        .create_rating(actor.id, product_id, req.value, req.comment)?;
    tracing::debug!(rating_id = rating.id, product_id, value = rating.value, "rating created");
    Ok(rating)
}

pub fn update(
    state: &AppState,
    actor: &Principal,
    rating_id: u64,
    req: UpdateRatingRequest,
) -> Result<Rating> {
    let existing = state.store().get_rating(rating_id)?;
    require_owner_or_staff(actor, existing.owner, "rating")?;

    state
        .store()
        .update_rating(rating_id, req.value, req.comment.map(Some))
}
