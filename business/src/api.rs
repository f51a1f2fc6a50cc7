//! User collection API helpers.
//!
//! One function per request against the collection endpoint. They perform the
//! network IO and map the answer into `DirectoryResult`; keeping the local
//! mirror up to date is the job of `UserDirectoryClient`.
//!
//! Bodies of successful mutation responses are not read.

use log::warn;

use crate::error::{DirectoryResult, UserDirectoryError};
use crate::http::{Client, RequestBuilder, Response};
use crate::user::{DeleteUserRequest, UserId, UserRecord};

/// What the server said about a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The server had no such user (`404`).
    AlreadyAbsent,
}

fn with_json<T: serde::Serialize>(
    request: RequestBuilder,
    body: &T,
) -> DirectoryResult<RequestBuilder> {
    request
        .json(body)
        .map_err(|e| UserDirectoryError::Encode(e.to_string()))
}

async fn send(request: RequestBuilder) -> DirectoryResult<Response> {
    let response = request.send().await?;
    if response.is_success() {
        Ok(response)
    } else {
        Err(UserDirectoryError::Status {
            status: response.status,
        })
    }
}

/// GET `/api/user`
///
/// The body must be a JSON array of records; its order is preserved.
pub async fn list_users(client: &Client, users_url: &str) -> DirectoryResult<Vec<UserRecord>> {
    let response = send(client.get(users_url).header("accept", "application/json")).await?;

    response
        .json()
        .map_err(|e| UserDirectoryError::Decode(e.to_string()))
}

/// POST `/api/user`
/// Body: the record as given; the server assigns the id.
pub async fn create_user(
    client: &Client,
    users_url: &str,
    user: &UserRecord,
) -> DirectoryResult<()> {
    send(with_json(client.post(users_url), user)?).await?;
    Ok(())
}

/// PUT `/api/user`
/// Body: the whole record, id included. Replaces the stored record.
pub async fn update_user(
    client: &Client,
    users_url: &str,
    user: &UserRecord,
) -> DirectoryResult<()> {
    user.require_id()?;
    send(with_json(client.put(users_url), user)?).await?;
    Ok(())
}

/// DELETE `/api/user`
/// Body: `{ "id": <id> }`
pub async fn delete_user(
    client: &Client,
    users_url: &str,
    id: UserId,
) -> DirectoryResult<DeleteOutcome> {
    let request = with_json(client.delete(users_url), &DeleteUserRequest { id })?;

    match send(request).await {
        Ok(_) => Ok(DeleteOutcome::Deleted),
        Err(err) if err.is_status(404) => {
            warn!("User {id} was already absent on the server");
            Ok(DeleteOutcome::AlreadyAbsent)
        }
        Err(err) => Err(err),
    }
}
