use axum::{
    body,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::sync::Arc;

use crate::stats::InboundRequest;
use crate::AppState;

// ─── Fallback: every path not served by a management endpoint ────

/// Looks the decoded request path up in the dynamic route table.
/// Unmatched requests get an empty 200, the same as a bare `GET /`.
pub async fn dispatch(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let Some((handler, pattern)) = state.registry.lookup(&decoded_path(req.uri().path())) else {
        return StatusCode::OK.into_response();
    };

    let inbound = capture(req, state.config.max_body_bytes).await;
    tracing::debug!(%pattern, uri = %inbound.uri, method = %inbound.method, "dynamic route hit");

    handler(&state.registry, inbound).into_response()
}

/// Percent-decoded form of the request path. Escapes that don't decode to
/// UTF-8 leave the path as received.
fn decoded_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

/// Snapshot the request for the stats log. The body is read in full up to
/// `limit`; a failed or oversized read is kept as an empty body.
async fn capture(req: Request, limit: usize) -> InboundRequest {
    let uri = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| req.uri().to_string());
    let method = req.method().as_str().to_owned();

    let body = match body::to_bytes(req.into_body(), limit).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!(%uri, error = %e, "request body not recorded");
            String::new()
        }
    };

    InboundRequest { uri, method, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escaped_path_segments() {
        assert_eq!(decoded_path("/hell%6F"), "/hello");
        assert_eq!(decoded_path("/a%5Fb/c"), "/a_b/c");
        assert_eq!(decoded_path("/plain"), "/plain");
    }

    #[test]
    fn undecodable_escapes_keep_raw_path() {
        assert_eq!(decoded_path("/bad%FF"), "/bad%FF");
    }
}
