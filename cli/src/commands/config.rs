//! `config show` and `config set-url`.

use anyhow::Result;
use tracing::instrument;
use userdir_business::BusinessConfig;

use crate::config::Config;
use crate::output::Output;

#[instrument(skip_all, name = "config_show")]
pub fn run_config_show(api_url: Option<&str>) -> Result<()> {
    let out = Output::new();
    let path = Config::config_path()?;
    let file = Config::load_from(&path)?;
    let effective = file.resolve(BusinessConfig::from_env()?, api_url);

    out.labeled("Config file", path.display());
    out.labeled(
        "Saved base URL",
        file.api.base_url.as_deref().unwrap_or("(not set)"),
    );
    out.labeled("Users endpoint", effective.users_url());
    Ok(())
}

#[instrument(skip_all, name = "config_set_url")]
pub fn run_config_set_url(url: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(url);
    let path = config.save()?;

    Output::new().success(format!("Saved base URL to {}", path.display()));
    Ok(())
}
