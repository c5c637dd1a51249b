//! Principal extraction from the `Authorization` header.
//!
//! A missing header is the anonymous principal; a present-but-invalid
//! token is rejected outright rather than downgraded to anonymous.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use storefront_core::error::StorefrontError;
use storefront_core::model::Principal;

use crate::app_state::AppState;
use crate::http::error::ApiError;

/// Optional principal: `None` when no Authorization header was sent.
pub struct MaybePrincipal(pub Option<Principal>);

/// Required principal: rejects with 401 when absent.
pub struct AuthPrincipal(pub Principal);

#[async_trait]
impl FromRequestParts<AppState> for MaybePrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(Self(None));
        };

        let value = header
            .to_str()
            .map_err(|_| StorefrontError::Unauthenticated)?;
        let token = value
            .strip_prefix("Bearer ")
            .ok_or(StorefrontError::Unauthenticated)?;

        let principal_id = state.sessions().resolve(token)?;
        // Session may outlive the account only briefly; treat that as 401.
        let user = state
            .store()
            .get_user(principal_id)
            .map_err(|_| StorefrontError::Unauthenticated)?;

        Ok(Self(Some(user.principal())))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybePrincipal(principal) = MaybePrincipal::from_request_parts(parts, state).await?;
        principal
            .map(Self)
            .ok_or_else(|| ApiError::from(StorefrontError::Unauthenticated))
    }
}
