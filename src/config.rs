use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `LISTEN_HOST`, defaults to all interfaces
    pub listen_host: String,
    /// `LISTEN_PORT`, required
    pub listen_port: u16,
    /// `MAX_BODY_BYTES`, upper bound on a recorded request body
    pub max_body_bytes: usize,
}

impl Config {
    /// Load `.env` if there is one, then read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::warn!(error = %e, "no .env file loaded, using process environment");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let listen_port = lookup("LISTEN_PORT")
            .ok_or(ConfigError::Missing("LISTEN_PORT"))
            .and_then(|v| parse("LISTEN_PORT", v))?;

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(v) => parse("MAX_BODY_BYTES", v)?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            listen_host: lookup("LISTEN_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            listen_port,
            max_body_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
