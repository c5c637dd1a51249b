use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::ratings::{self, RateRequest, UpdateRatingRequest};

pub async fn list_for_product(
    State(state): State<AppState>,
    Path(product_id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(ratings::list_for_product(&state, product_id)?))
}

pub async fn submit(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(product_id): Path<u64>,
    Json(req): Json<RateRequest>,
) -> ApiResult<impl IntoResponse> {
    let rating = ratings::submit(&state, &actor, product_id, req)?;
    Ok((StatusCode::CREATED, Json(rating)))
}

pub async fn mine(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(ratings::my_ratings(&state, &actor)))
}

pub async fn update(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(rating_id): Path<u64>,
    Json(req): Json<UpdateRatingRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(ratings::update(&state, &actor, rating_id, req)?))
}
