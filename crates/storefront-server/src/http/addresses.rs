use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::addresses::{self, AddressRequest, UpdateAddressRequest};

pub async fn list(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(addresses::list(&state, &actor)))
}

pub async fn create(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Json(req): Json<AddressRequest>,
) -> ApiResult<impl IntoResponse> {
    let address = addresses::create(&state, &actor, req)?;
    Ok((StatusCode::CREATED, Json(address)))
}

pub async fn detail(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(addresses::get(&state, &actor, id)?))
}

pub async fn update(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
    Json(req): Json<UpdateAddressRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(addresses::update(&state, &actor, id, req)?))
}

pub async fn delete(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    addresses::delete(&state, &actor, id)?;
    Ok(StatusCode::NO_CONTENT)
}
