use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::RouteHandler;

/// Failures raised by the route table and path validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Route [{0}] already registered, remove first.")]
    Conflict(String),

    #[error("Route doesn't exist, nothing to remove: {0}")]
    NotFound(String),

    #[error("Route [{0}] is built in and cannot be removed.")]
    Reserved(String),
}

/// Exact-match map from normalized path to handler.
///
/// Reserved patterns are served by the static router; they count as
/// registered for `add` but can never be removed.
pub struct RouteTable {
    routes: HashMap<String, RouteHandler>,
    reserved: HashSet<String>,
}

impl RouteTable {
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: HashMap::new(),
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, path: &str, handler: RouteHandler) -> Result<(), RouteError> {
        if self.reserved.contains(path) || self.routes.contains_key(path) {
            return Err(RouteError::Conflict(path.to_owned()));
        }
        self.routes.insert(path.to_owned(), handler);
        Ok(())
    }

    pub fn remove(&mut self, path: &str) -> Result<(), RouteError> {
        if self.reserved.contains(path) {
            return Err(RouteError::Reserved(path.to_owned()));
        }
        self.routes
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| RouteError::NotFound(path.to_owned()))
    }

    /// Handler and matched pattern for a request path, if any.
    pub fn lookup(&self, path: &str) -> Option<(RouteHandler, String)> {
        self.routes
            .get_key_value(path)
            .map(|(pattern, handler)| (handler.clone(), pattern.clone()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }
}
