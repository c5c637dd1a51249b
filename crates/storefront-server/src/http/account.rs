use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::accounts::{
    self, ChangePasswordRequest, DeleteAccountRequest, LoginRequest, RegisterRequest,
    UpdateUserRequest,
};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = accounts::register(&state, req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = accounts::login(&state, req)?;
    Ok(Json(session))
}

pub async fn me(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(accounts::me(&state, &actor)?))
}

pub async fn list_users(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(accounts::list_users(&state, &actor)?))
}

pub async fn get_user(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(accounts::get_user(&state, &actor, id)?))
}

pub async fn update_user(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(accounts::update_user(&state, &actor, id, req)?))
}

pub async fn change_password(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    accounts::change_password(&state, &actor, id, req)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_account(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Path(id): Path<u64>,
    Json(req): Json<DeleteAccountRequest>,
) -> ApiResult<impl IntoResponse> {
    accounts::delete_account(&state, &actor, id, req)?;
    Ok(StatusCode::NO_CONTENT)
}
