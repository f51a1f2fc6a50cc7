//! Add user command.

use anyhow::{Result, bail};
use tracing::instrument;
use userdir_business::{UserDirectoryClient, UserRecord};

use crate::commands::mutation_error;
use crate::output::{Format, Output};
use crate::record::build_record;

#[instrument(skip_all, name = "add", fields(field_count = fields.len(), has_data = data.is_some()))]
pub async fn run_add(
    client: &UserDirectoryClient,
    fields: &[String],
    data: Option<&str>,
    format: Format,
) -> Result<()> {
    let record = build_record(UserRecord::new(), data, fields)?;
    if record.id.is_none() && record.fields.is_empty() {
        bail!("Nothing to add: pass --field KEY=VALUE or --data JSON");
    }

    client
        .add(&record)
        .await
        .map_err(|err| mutation_error(err, "adding", "added"))?;

    let out = Output::new();
    if format == Format::Table {
        out.success("User added");
    }
    out.users(&client.users(), format)
}
