//! Axum router wiring.
//!
//! All routes are versioned under `/v1`. The HTTP layer only maps policy
//! outcomes to status codes; every decision lives in the service layer.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{app_state::AppState, http};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // accounts
        .route("/v1/account/register", post(http::account::register))
        .route("/v1/account/login", post(http::account::login))
        .route("/v1/account/me", get(http::account::me))
        .route("/v1/users", get(http::account::list_users))
        .route(
            "/v1/users/:id",
            get(http::account::get_user)
                .put(http::account::update_user)
                .delete(http::account::delete_account),
        )
        .route("/v1/users/:id/password", post(http::account::change_password))
        // catalog
        .route(
            "/v1/products",
            get(http::catalog::list).post(http::catalog::create),
        )
        .route(
            "/v1/products/:id",
            get(http::catalog::detail)
                .put(http::catalog::update)
                .delete(http::catalog::delete),
        )
        // ratings
        .route(
            "/v1/products/:id/ratings",
            get(http::ratings::list_for_product).post(http::ratings::submit),
        )
        .route("/v1/ratings", get(http::ratings::mine))
        .route("/v1/ratings/:id", put(http::ratings::update))
        // reports
        .route(
            "/v1/reports",
            get(http::reports::list).post(http::reports::file),
        )
        .route("/v1/reports/:id", get(http::reports::detail))
        .route("/v1/reports/:id/status", post(http::reports::change_status))
        // addresses
        .route(
            "/v1/addresses",
            get(http::addresses::list).post(http::addresses::create),
        )
        .route(
            "/v1/addresses/:id",
            get(http::addresses::detail)
                .put(http::addresses::update)
                .delete(http::addresses::delete),
        )
        // orders
        .route("/v1/orders", get(http::orders::list))
        .route("/v1/orders/:id", get(http::orders::detail))
        .route("/v1/orders/:id/deliver", post(http::orders::mark_delivered))
        .route(
            "/v1/orders/:id/confirm-payment",
            post(http::orders::confirm_payment),
        )
        // cards & payments
        .route(
            "/v1/cards",
            get(http::cards::list).post(http::cards::register),
        )
        .route("/v1/cards/:id", axum::routing::delete(http::cards::delete))
        .route("/v1/cards/:id/mask", get(http::cards::masked))
        .route("/v1/payments/charge", post(http::payments::charge))
        // notifications
        .route("/v1/notifications", get(http::notifications::list))
        .route(
            "/v1/notifications/:id/read",
            post(http::notifications::mark_read),
        )
        .route(
            "/v1/notifications/preferences",
            get(http::notifications::preferences).put(http::notifications::update_preferences),
        )
        .route(
            "/v1/notifications/promote",
            post(http::notifications::promote),
        )
        .with_state(state)
}
