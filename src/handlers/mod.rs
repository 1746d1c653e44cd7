pub mod dispatch;
pub mod routes;
pub mod stats;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::routing::RouteError;

// ─── Shared query parameters ─────────────────────────────────────

/// First `path` value of the raw query string; empty when absent.
/// Repeated keys are tolerated rather than rejected.
pub fn path_param(raw_query: Option<&str>) -> String {
    raw_query
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "path")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

// ─── Unified error type ──────────────────────────────────────────

/// Management failures are reported as 200 plain text so existing
/// clients that only read the body keep working.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Error marshaling stat: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::OK, format!("{self}\n")).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_param_takes_first_value() {
        assert_eq!(path_param(Some("path=a&path=b")), "a");
        assert_eq!(path_param(Some("x=1&path=a%20b")), "a b");
        assert_eq!(path_param(Some("path")), "");
        assert_eq!(path_param(Some("other=1")), "");
        assert_eq!(path_param(None), "");
    }
}
