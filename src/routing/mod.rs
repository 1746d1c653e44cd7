//! Dynamic route table.
//!
//! # Data Flow
//! ```text
//! /addRoute?path=p  → path::normalize → path::is_valid → Registry::add_route(p, tracking_handler(p))
//! GET <p>           → dispatcher → Registry::lookup(p) → handler(registry, request)
//! /removeRoute?path=p → path::normalize → Registry::remove_route(p)
//! ```
//!
//! Lookup is exact-match on the request path. Handlers are invoked after the
//! registry lock is released; a handler that records stats re-acquires it.

pub mod path;
pub mod table;

pub use table::{RouteError, RouteTable};

use std::sync::Arc;

use crate::registry::Registry;
use crate::stats::{InboundRequest, StatRecord};

/// Callable stored per dynamic route. Returns the plain-text response body.
pub type RouteHandler = Arc<dyn Fn(&Registry, InboundRequest) -> String + Send + Sync>;

/// Handler installed on every route added through `/addRoute`.
/// The pattern is bound here, so the handler never re-queries the table.
pub fn tracking_handler(pattern: impl Into<String>) -> RouteHandler {
    let pattern = pattern.into();
    Arc::new(move |registry: &Registry, req: InboundRequest| {
        registry.record(&pattern, StatRecord::capture(req));
        format!("Hello, You visited: {pattern}\n")
    })
}
