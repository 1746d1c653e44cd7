use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

pub const ADD_ROUTE: &str = "/addRoute";
pub const REMOVE_ROUTE: &str = "/removeRoute";
pub const GET_STAT: &str = "/getStat";

/// Paths owned by the static router; dynamic routes can't shadow them.
pub const MANAGEMENT_PATHS: [&str; 3] = [ADD_ROUTE, REMOVE_ROUTE, GET_STAT];

/// Builds the axum `Router`: management endpoints plus a fallback that
/// serves the dynamic route table.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── Management endpoints ────────────────────────────────
        .route(ADD_ROUTE, get(handlers::routes::add_route))
        .route(REMOVE_ROUTE, get(handlers::routes::remove_route))
        .route(GET_STAT, get(handlers::stats::get_stat))
        // ── Dynamic routes and the default root ─────────────────
        .fallback(handlers::dispatch::dispatch)
        .with_state(state)
        // ── Request tracing ─────────────────────────────────────
        .layer(TraceLayer::new_for_http())
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
