pub mod log;

pub use log::StatsLog;

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Fixed timestamp layout: `YYYY-MM-DD HH:MM:SS.mmm`.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// The parts of an inbound request that end up in the stats log.
/// Built by the dispatcher before the route handler runs.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    /// Raw request-target as received (path plus query)
    pub uri: String,
    pub method: String,
    pub body: String,
}

/// One immutable entry in a route's request log.
///
/// Serialized with the capitalised keys clients of `/getStat` expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRecord {
    #[serde(rename = "URI")]
    pub uri: String,
    /// Reserved; always empty.
    #[serde(rename = "Headers")]
    pub headers: BTreeMap<String, String>,
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "Time")]
    pub time: String,
}

impl StatRecord {
    /// Stamp an inbound request with the current local time.
    pub fn capture(req: InboundRequest) -> Self {
        Self::at(req, Local::now())
    }

    pub fn at(req: InboundRequest, when: DateTime<Local>) -> Self {
        Self {
            uri: req.uri,
            headers: BTreeMap::new(),
            body: req.body,
            method: req.method,
            time: when.format(TIME_FORMAT).to_string(),
        }
    }
}
