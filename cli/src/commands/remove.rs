//! Remove user command.

use anyhow::Result;
use tracing::instrument;
use userdir_business::{UserDirectoryClient, UserId};

use crate::commands::mutation_error;
use crate::output::{Format, Output};

#[instrument(skip_all, name = "remove", fields(id = id))]
pub async fn run_remove(client: &UserDirectoryClient, id: UserId, format: Format) -> Result<()> {
    client
        .remove(id)
        .await
        .map_err(|err| mutation_error(err, "deleting", "deleted"))?;

    let out = Output::new();
    if format == Format::Table {
        out.success(format!("User {id} removed"));
    }
    out.users(&client.users(), format)
}
