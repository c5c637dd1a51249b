use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::reports::{self, ChangeStatusRequest, FileReportRequest};

pub async fn list(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(reports::list(&state, &actor)))
}

pub async fn file(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Json(req): Json<FileReportRequest>,
) -> ApiResult<impl IntoResponse> {
    let report = reports::file(&state, &actor, req)?;
    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn detail(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(reports::get(&state, &actor, id)?))
}

pub async fn change_status(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
    Json(req): Json<ChangeStatusRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(reports::change_status(&state, &actor, id, req)?))
}
