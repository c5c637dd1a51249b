//! storefront server binary.
//!
//! - REST endpoints under /v1 (accounts, catalog, ratings, reports,
//!   addresses, orders, cards, payments, notifications)
//! - Strict YAML config with validation
//! - Tracing with env-filter

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use storefront_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("storefront.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "storefront-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
