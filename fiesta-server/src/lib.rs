//! Fiesta Server - remote cart store for the Fiesta storefront
//!
//! Stores one cart per anonymous user id in memory and serves it over
//! `GET/POST /api/cart/{userId}`.

pub mod api;
pub mod config;
pub mod logger;
pub mod state;

pub use api::build_app;
pub use config::Config;
pub use state::ServerState;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serve on `listener` until `shutdown` is cancelled
pub async fn serve(
    listener: TcpListener,
    state: ServerState,
    config: &Config,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let app = build_app(state, config.request_timeout());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
