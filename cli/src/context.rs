//! Directory client construction for the CLI.

use anyhow::{Context as _, Result};
use tracing::{debug, instrument};
use userdir_business::{BusinessConfig, UserDirectoryClient};

use crate::config::Config;

/// Resolve the endpoint (flag/env, then config file, then defaults) and build a client.
#[instrument(skip_all, name = "build_client")]
pub fn build_client(api_url: Option<&str>) -> Result<UserDirectoryClient> {
    let file = Config::load()?;
    let defaults = BusinessConfig::from_env().context("Failed to read USERDIR_* environment")?;
    let config = file.resolve(defaults, api_url);

    debug!("Using user endpoint {}", config.users_url());
    Ok(UserDirectoryClient::new(config))
}
