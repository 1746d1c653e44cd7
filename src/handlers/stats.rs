use axum::extract::{RawQuery, State};
use std::sync::Arc;

use crate::routing::{path, RouteError};
use crate::AppState;

use super::{path_param, ApiError};

// ─── GET /getStat?path=<p> ───────────────────────────────────────

/// Drains the records for a path and returns them as a JSON array.
/// A path that was never hit answers with an empty body.
pub async fn get_stat(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<String, ApiError> {
    let path = path::normalize(&path_param(query.as_deref()));

    if !path::is_valid(&path) {
        return Err(RouteError::InvalidPath(path).into());
    }

    let Some(records) = state.registry.drain(&path) else {
        return Ok(String::new());
    };

    tracing::debug!(%path, count = records.len(), "stats drained");

    let json = serde_json::to_string(&records)?;
    Ok(format!("{json}\n"))
}
