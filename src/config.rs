//! Environment configuration
//!
//! All knobs come from `KIN_*` environment variables with local-development
//! defaults. `dotenvy` is loaded by the binary before this runs, so a `.env`
//! file works too.

use std::time::Duration;

use url::Url;

use crate::error::{ConfigError, GraphResult};

pub const ENV_BACKEND_URL: &str = "KIN_BACKEND_URL";
pub const ENV_BIND_ADDR: &str = "KIN_BIND_ADDR";
pub const ENV_REQUEST_TIMEOUT: &str = "KIN_REQUEST_TIMEOUT_SECS";

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3050";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for the graph API server
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: Url,
    pub bind_addr: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> GraphResult<Self> {
        Self::from_parts(
            std::env::var(ENV_BACKEND_URL).ok(),
            std::env::var(ENV_BIND_ADDR).ok(),
            std::env::var(ENV_REQUEST_TIMEOUT).ok(),
        )
    }

    fn from_parts(
        backend_url: Option<String>,
        bind_addr: Option<String>,
        timeout_secs: Option<String>,
    ) -> GraphResult<Self> {
        let raw_url = backend_url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let mut backend_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidValue {
            variable: ENV_BACKEND_URL.to_string(),
            reason: e.to_string(),
        })?;
        // Url::join treats a path without a trailing slash as a file, which
        // would drop the last segment when endpoint paths are appended.
        if !backend_url.path().ends_with('/') {
            let path = format!("{}/", backend_url.path());
            backend_url.set_path(&path);
        }

        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let request_timeout = match timeout_secs {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                    variable: ENV_REQUEST_TIMEOUT.to_string(),
                    reason: format!("not a number of seconds: {raw}"),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            backend_url,
            bind_addr,
            request_timeout,
        })
    }
}
