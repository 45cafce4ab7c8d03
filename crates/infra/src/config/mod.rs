//! API configuration
//!
//! Resolves the backend base URL once at startup. Resolution order:
//! 1. `CALLDASH_API_URL` environment variable (override, wins when set)
//! 2. The hardcoded URL for the selected environment
//!
//! ## Environment Variables
//! - `CALLDASH_API_URL`: Base URL override for the call management backend

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the base URL when set.
pub const API_URL_ENV_VAR: &str = "CALLDASH_API_URL";

/// Production backend URL.
pub const PRODUCTION_API_URL: &str = "https://avrek-calls.onrender.com";

/// Development backend URL (local backend).
pub const DEVELOPMENT_API_URL: &str = "http://localhost:3001";

/// Deployment environment selecting the default base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// The hardcoded base URL for this environment.
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Development => DEVELOPMENT_API_URL,
        }
    }
}

/// Configuration for the call API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the call management backend, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: PRODUCTION_API_URL.to_string() }
    }
}

impl ApiConfig {
    /// Build a config with an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the base URL for the given environment.
    ///
    /// The `CALLDASH_API_URL` environment variable takes precedence over the
    /// environment's hardcoded URL.
    pub fn resolve(environment: Environment) -> Self {
        match std::env::var(API_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                tracing::info!(url = %url, "API base URL taken from environment override");
                Self::with_base_url(url)
            }
            _ => {
                tracing::debug!(environment = ?environment, "API base URL from environment default");
                Self::with_base_url(environment.base_url())
            }
        }
    }
}
