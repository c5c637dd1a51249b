use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::cards::{self, RegisterCardRequest};

pub async fn list(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(cards::list(&state, &actor)))
}

pub async fn register(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Json(req): Json<RegisterCardRequest>,
) -> ApiResult<impl IntoResponse> {
    let card = cards::register(&state, &actor, req).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

pub async fn masked(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(cards::masked(&state, &actor, id)?))
}

pub async fn delete(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    cards::delete(&state, &actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
