//! Client-side mirror of a remote user directory.
//!
//! [`UserDirectoryClient`] holds the last fetched `/api/user` array and
//! refetches it after every successful add, update or remove.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod http;
pub mod state;
pub mod user;

pub use api::DeleteOutcome;
pub use config::{BusinessConfig, ConfigError};
pub use directory::UserDirectoryClient;
pub use error::{DirectoryResult, UserDirectoryError};
pub use state::{SyncStatus, UserCollectionState};
pub use user::{DeleteUserRequest, UserId, UserRecord};
