//! Where the user directory lives.
//!
//! `BusinessConfig` only knows how to build URLs. It can be constructed
//! directly (tests point it at a mock server) or from the process environment.

use std::env::vars;

use log::info;
use serde::Deserialize;
use thiserror::Error;
use ustr::Ustr;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Collection path under `/api`.
pub const DEFAULT_USERS_PATH: &str = "user";

/// The environment could not be read into a config.
#[derive(Debug, Error)]
#[error("invalid USERDIR_* environment: {0}")]
pub struct ConfigError(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Origin of the server, e.g. `https://example.com`. Empty means same-origin.
    pub api_base_url: String,
    /// Path segment of the user collection below `/api`.
    pub users_path: String,
}

/// Environment overrides, read with `serde-env`.
#[derive(Debug, Default, Deserialize)]
struct RawEnvConfig {
    userdir_api_base_url: Option<String>,
    userdir_users_path: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            users_path: DEFAULT_USERS_PATH.to_owned(),
        }
    }

    /// Reads `USERDIR_API_BASE_URL` and `USERDIR_USERS_PATH`.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawEnvConfig =
            serde_env::from_iter(vars()).map_err(|e| ConfigError(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawEnvConfig) -> Self {
        let mut config = Self::default();
        if let Some(base) = raw.userdir_api_base_url {
            info!("Using USERDIR_API_BASE_URL: {base}");
            config.api_base_url = base;
        }
        if let Some(path) = raw.userdir_users_path {
            config.users_path = path;
        }
        config
    }

    pub fn api_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{base}/api"))
        }
    }

    /// Full URL of the user collection endpoint, e.g. `https://example.com/api/user`.
    pub fn users_url(&self) -> String {
        let path = self.users_path.trim_matches('/');
        format!("{}/{path}", self.api_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
