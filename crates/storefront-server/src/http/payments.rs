use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::AuthPrincipal;
use crate::services::payments::{self, ChargeRequest};

pub async fn charge(
    State(state): State<AppState>,
    AuthPrincipal(actor): AuthPrincipal,
    Json(req): Json<ChargeRequest>,
) -> ApiResult<impl IntoResponse> {
    let order = payments::charge(&state, &actor, req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
