//! Configuration file handling for the CLI.
//!
//! Stores the server origin in `$XDG_CONFIG_HOME/userdir/config.toml` following
//! the XDG Base Directory Specification.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use userdir_business::BusinessConfig;

/// CLI configuration stored on disk
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Endpoint section
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server origin, e.g. `https://example.com`
    pub base_url: Option<String>,
    /// Collection path under `/api`
    pub users_path: Option<String>,
}

impl Config {
    /// Returns `$XDG_CONFIG_HOME/userdir/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "userdir", "userdir")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.api.base_url = Some(url.trim_end_matches('/').to_owned());
    }

    /// Build the endpoint config: `api_url` (flag or env) over this file over `base`.
    pub fn resolve(&self, base: BusinessConfig, api_url: Option<&str>) -> BusinessConfig {
        let mut config = base;
        if let Some(url) = &self.api.base_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(path) = &self.api.users_path {
            config.users_path.clone_from(path);
        }
        if let Some(url) = api_url {
            url.clone_into(&mut config.api_base_url);
        }
        config
    }
}
