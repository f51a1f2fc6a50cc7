//! Command implementations for the userdir CLI.
//!
//! Each subcommand is implemented in its own module. The directory commands
//! take a ready `UserDirectoryClient` so tests can point them at a mock server.

pub mod add;
pub mod completions;
pub mod config;
pub mod list;
pub mod remove;
pub mod update;

pub use add::run_add;
pub use completions::generate_completions;
pub use config::{run_config_set_url, run_config_show};
pub use list::run_list;
pub use remove::run_remove;
pub use update::run_update;

use userdir_business::UserDirectoryError;

/// Wrap a failed mutation for display.
///
/// A `Resync` failure means the change went through, so it gets its own wording.
pub(crate) fn mutation_error(err: UserDirectoryError, doing: &str, done: &str) -> anyhow::Error {
    match err {
        UserDirectoryError::Resync(inner) => {
            anyhow::Error::new(*inner).context(format!("User {done}, but refreshing users failed"))
        }
        other => anyhow::Error::new(other).context(format!("Error {doing} user")),
    }
}
