use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::notifications::{self, PromoteRequest, UpdatePreferencesRequest};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub unread_only: bool,
}

pub async fn list(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Query(q): Query<ListQuery>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(notifications::list(&state, &actor, q.unread_only)))
}

pub async fn mark_read(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(notifications::mark_read(&state, &actor, id)?))
}

pub async fn preferences(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(notifications::preferences(&state, &actor)))
}

pub async fn update_preferences(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Json(req): Json<UpdatePreferencesRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(notifications::update_preferences(&state, &actor, req)))
}

pub async fn promote(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Json(req): Json<PromoteRequest>,
) -> ApiResult<impl IntoResponse> {
    let notification = notifications::promote(&state, &actor, req).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}
