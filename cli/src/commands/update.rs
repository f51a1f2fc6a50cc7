//! Update user command.
//!
//! The server replaces the whole record, so by default the current record is
//! fetched first and the given attributes are applied on top of it.

use anyhow::{Context as _, Result};
use tracing::instrument;
use userdir_business::{UserDirectoryClient, UserId, UserRecord};

use crate::commands::mutation_error;
use crate::output::{Format, Output};
use crate::record::build_record;

#[instrument(skip_all, name = "update", fields(id = id, replace = replace))]
pub async fn run_update(
    client: &UserDirectoryClient,
    id: UserId,
    fields: &[String],
    data: Option<&str>,
    replace: bool,
    format: Format,
) -> Result<()> {
    let base = if replace {
        UserRecord::new()
    } else {
        current_record(client, id).await?
    };

    let mut record = build_record(base, data, fields)?;
    record.id = Some(id);

    client
        .update(&record)
        .await
        .map_err(|err| mutation_error(err, "updating", "updated"))?;

    let out = Output::new();
    if format == Format::Table {
        out.success(format!("User {id} updated"));
    }
    out.users(&client.users(), format)
}

async fn current_record(client: &UserDirectoryClient, id: UserId) -> Result<UserRecord> {
    client.fetch_all().await.context("Error fetching users")?;
    client
        .users()
        .into_iter()
        .find(|user| user.id == Some(id))
        .with_context(|| format!("No user with id {id}"))
}
