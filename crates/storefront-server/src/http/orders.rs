use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::orders;

pub async fn list(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(orders::list(&state, &actor)))
}

pub async fn detail(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(orders::get(&state, &actor, id)?))
}

pub async fn mark_delivered(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(orders::mark_delivered(&state, &actor, id).await?))
}

pub async fn confirm_payment(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(orders::confirm_payment(&state, &actor, id)?))
}
