//! List users command.

use anyhow::{Context as _, Result};
use tracing::instrument;
use userdir_business::UserDirectoryClient;

use crate::output::{Format, Output};

#[instrument(skip_all, name = "list")]
pub async fn run_list(client: &UserDirectoryClient, format: Format) -> Result<()> {
    client.fetch_all().await.context("Error fetching users")?;
    Output::new().users(&client.users(), format)
}
