//! Host configuration parsed from environment variables.
//!
//! Variables (all optional):
//! - `PORT`: listen port, default 3000
//! - `API_UPSTREAM_URL`: backend origin, default `http://localhost:8000`
//! - `PROXY_TIMEOUT_SECS`: per-request upstream timeout, default 30

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub api_upstream_url: String,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let api_upstream_url = get("API_UPSTREAM_URL")
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !api_upstream_url.starts_with("http://") && !api_upstream_url.starts_with("https://") {
            return Err(ConfigError::Invalid { var: "API_UPSTREAM_URL", value: api_upstream_url });
        }
        let timeout_secs = parse_or("PROXY_TIMEOUT_SECS", get("PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;

        Ok(Self { port, api_upstream_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
