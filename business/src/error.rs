use thiserror::Error;

use crate::http::HttpError;

/// Why a user directory operation did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserDirectoryError {
    #[error(transparent)]
    Request(#[from] HttpError),

    #[error("API returned status: {status}")]
    Status { status: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("user record has no id")]
    MissingId,

    /// The mutation was accepted but the follow-up fetch failed, so the local
    /// mirror still shows the previous collection.
    #[error("change applied but refreshing users failed: {0}")]
    Resync(Box<UserDirectoryError>),
}

impl UserDirectoryError {
    /// True when the server answered with the given status.
    pub fn is_status(&self, expected: u16) -> bool {
        matches!(self, Self::Status { status } if *status == expected)
    }
}

pub type DirectoryResult<T> = Result<T, UserDirectoryError>;
