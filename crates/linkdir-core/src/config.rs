// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - API configuration
//
// The base URL comes from the environment at startup, falling back to the
// value baked in at compile time. A local .env file is honoured.

use crate::types::ConfigError;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "LINKDIR_API_BASE_URL";

/// Environment variable overriding the request timeout in milliseconds
pub const TIMEOUT_ENV: &str = "LINKDIR_API_TIMEOUT_MS";

/// Environment variable holding the path the app is served under
pub const BASE_PATH_ENV: &str = "LINKDIR_BASE_PATH";

/// Request timeout applied to every API call
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Connection settings for the REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, always ending in '/' so endpoints join beneath it
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration for the given base URL with the default timeout
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {:?}", path);
        }

        let base_url = pick_base_url(
            std::env::var(BASE_URL_ENV).ok(),
            option_env!("LINKDIR_API_BASE_URL"),
        )
        .ok_or(ConfigError::MissingBaseUrl(BASE_URL_ENV))?;

        let mut config = Self::new(&base_url)?;

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            config.timeout = parse_timeout(&raw)?;
        }

        tracing::info!(
            "API base URL: {}, timeout: {:?}",
            config.base_url,
            config.timeout
        );
        Ok(config)
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Path the app is served under, "/" unless configured
pub fn base_path_from_env() -> String {
    std::env::var(BASE_PATH_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Runtime value first, then the compile-time one; blank values count as unset
fn pick_base_url(runtime: Option<String>, compiled: Option<&str>) -> Option<String> {
    runtime
        .filter(|v| !v.trim().is_empty())
        .or_else(|| compiled.map(str::to_string))
        .filter(|v| !v.trim().is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }

    // Url::join replaces the last path segment unless the path ends in '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}
