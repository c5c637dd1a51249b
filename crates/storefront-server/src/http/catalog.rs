use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app_state::AppState;
use crate::http::error::ApiResult;
use crate::http::extract::MaybePrincipal;
use crate::services::catalog::{self, CreateProductRequest, UpdateProductRequest};

pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(catalog::list_products(&state)))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(catalog::get_product(&state, id)?))
}

pub async fn create(
    State(state): State<AppState>,
    MaybePrincipal(actor): MaybePrincipal,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    let product = catalog::create_product(&state, actor.as_ref(), req)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update(
    State(state): State<AppState>,
    MaybePrincipal(actor): MaybePrincipal,
    Path(id): Path<u64>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(catalog::update_product(&state, actor.as_ref(), id, req)?))
}

pub async fn delete(
    State(state): State<AppState>,
    MaybePrincipal(actor): MaybePrincipal,
    Path(id): Path<u64>,
) -> ApiResult<impl IntoResponse> {
    catalog::delete_product(&state, actor.as_ref(), id)?;
    Ok(StatusCode::NO_CONTENT)
}
