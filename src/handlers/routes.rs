use axum::extract::{RawQuery, State};
use std::sync::Arc;

use crate::routing::{path, tracking_handler, RouteError};
use crate::AppState;

use super::{path_param, ApiError};

// ─── GET /addRoute?path=<p> ──────────────────────────────────────

pub async fn add_route(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<String, ApiError> {
    let path = path::normalize(&path_param(query.as_deref()));

    if !path::is_valid(&path) {
        tracing::warn!(%path, "rejected route: invalid path");
        return Err(RouteError::InvalidPath(path).into());
    }

    if let Err(e) = state.registry.add_route(&path, tracking_handler(path.clone())) {
        tracing::warn!(%path, error = %e, "rejected route");
        return Err(e.into());
    }

    tracing::info!(%path, routes = state.registry.route_count(), "route added");
    Ok(format!("New route was added: {path}\n"))
}

// ─── GET /removeRoute?path=<p> ───────────────────────────────────

pub async fn remove_route(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<String, ApiError> {
    let path = path::normalize(&path_param(query.as_deref()));

    if let Err(e) = state.registry.remove_route(&path) {
        tracing::warn!(%path, error = %e, "route not removed");
        return Err(e.into());
    }

    tracing::info!(%path, "route removed");
    Ok(format!("Route removed: {path}\n"))
}
