//! # Scale Cars Shop Server
//!
//! Local JSON facade over one [`ShopState`]. Every request reads or mutates
//! the same session; there is no per-client isolation.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Server                                      │
//! │                                                                         │
//! │  Front end ───► HTTP (8080) ───► commands ───► ShopHandle              │
//! │                     │                              │                    │
//! │                TraceLayer                          ▼                    │
//! │                                          scalecars-core ShopState       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scalecars_core::{Catalog, ShopState};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,scalecars=debug,tower_http=info";

/// Installs the global tracing subscriber.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(commands::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let catalog = Catalog::seed();
    info!(products = catalog.len(), "Catalog loaded");

    let app = router(AppState::new(ShopState::new(catalog), config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "shop-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Liveness check. Returns "ok" while the process is up.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
