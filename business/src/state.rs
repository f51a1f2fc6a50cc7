//! The locally mirrored user collection.

use chrono::{DateTime, Utc};

use crate::user::UserRecord;

/// Status of the last fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SyncStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading,

    /// The last fetch succeeded.
    Loaded,

    /// The last fetch failed with this error message.
    Error(String),
}

/// Snapshot of the mirror.
///
/// `users` is exactly the array of the last successful fetch. A failed fetch
/// only touches `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCollectionState {
    pub users: Vec<UserRecord>,
    pub status: SyncStatus,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl UserCollectionState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, SyncStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SyncStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Mark a fetch as in flight and hand back the status it replaced.
    pub(crate) fn loading(&mut self) -> SyncStatus {
        std::mem::replace(&mut self.status, SyncStatus::Loading)
    }

    /// Put back the status of an abandoned fetch.
    pub(crate) fn restore(&mut self, status: SyncStatus) {
        self.status = status;
    }

    pub(crate) fn replace(&mut self, users: Vec<UserRecord>, at: DateTime<Utc>) {
        self.users = users;
        self.status = SyncStatus::Loaded;
        self.last_synced_at = Some(at);
    }

    pub(crate) fn failed(&mut self, message: String) {
        self.status = SyncStatus::Error(message);
    }
}
