use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod handlers;
mod registry;
mod routing;
mod server;
mod stats;

use crate::config::Config;
use crate::registry::Registry;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Dynamic route table and per-route request log.
    pub registry: Registry,

    /// Startup settings; handlers only read `max_body_bytes`.
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            registry: Registry::new(server::MANAGEMENT_PATHS),
            config,
        }
    }
}

#[tokio::main]
async fn main() {
    // ── 1. Logging ───────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_stats_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 2. Configuration ─────────────────────────────────────────
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };

    let addr = config.bind_address();
    tracing::info!(
        address = %addr,
        max_body_bytes = config.max_body_bytes,
        "configuration loaded"
    );

    // ── 3. Build shared state and router ─────────────────────────
    let app = server::create_router(Arc::new(AppState::new(config)));

    // ── 4. Bind & serve ──────────────────────────────────────────
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "failed to bind listener");
            std::process::exit(1);
        }
    };

    tracing::info!(address = %addr, "server started");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }

    tracing::info!("shutdown complete");
}
