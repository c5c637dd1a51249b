//! Domain error -> HTTP response mapping.
//!
//! The three denial outcomes stay distinguishable on the wire:
//! forbidden -> 403, not-found -> 404, unauthenticated -> 401.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use storefront_core::error::{ClientCode, StorefrontError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError(pub StorefrontError);

impl From<StorefrontError> for ApiError {
    fn from(e: StorefrontError) -> Self {
        Self(e)
    }
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::Validation => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::Forbidden => StatusCode::FORBIDDEN,
        ClientCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ClientCode::Conflict => StatusCode::CONFLICT,
        ClientCode::Storage | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        ClientCode::Payment => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = status_for(code);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "code": code.as_str(),
            "detail": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
