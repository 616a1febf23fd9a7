//! Environment-driven client configuration.

use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://automationexercise.com";
pub const BASE_URL_VAR: &str = "SHOP_BASE_URL";
pub const TIMEOUT_VAR: &str = "SHOP_HTTP_TIMEOUT_SECS";

/// Where the clients point and how long the transport may wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves the transport without a deadline.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    ApiError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        debug!(base_url = %base_url, ?timeout, "loaded client configuration");
        Ok(Self { base_url, timeout })
    }
}
