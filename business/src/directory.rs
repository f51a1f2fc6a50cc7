//! `UserDirectoryClient`: a local mirror of the remote user collection.
//!
//! ## How it stays in sync
//! Every successful mutation (add/update/remove) is followed by a full fetch
//! that replaces the mirrored collection. There is no local delta and no
//! merging: the mirror is always the last array the server returned.
//!
//! ## Ordering
//! All operations on one client share a FIFO queue. An operation holds its
//! place for its whole duration, mutation and follow-up fetch included, so
//! the mirror always ends up reflecting the most recently started mutation.
//!
//! ## Failures
//! A failed operation logs `Error <verb> user(s): <detail>` at error level,
//! leaves the collection untouched and returns the error to the caller.
//!
//! ## Cancellation
//! Dropping an operation's future cancels it. A fetch dropped mid-flight
//! leaves `users` alone and restores the status it found.

use std::future::Future;

use chrono::Utc;
use log::{debug, error, info};
use tokio::sync::{Mutex, watch};

use crate::api;
use crate::config::BusinessConfig;
use crate::error::{DirectoryResult, UserDirectoryError};
use crate::http::Client;
use crate::state::{SyncStatus, UserCollectionState};
use crate::user::{UserId, UserRecord};

/// Handle to one mirrored user collection.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct UserDirectoryClient {
    config: BusinessConfig,
    http: Client,
    state: watch::Sender<UserCollectionState>,
    queue: Mutex<()>,
}

impl UserDirectoryClient {
    pub fn new(config: BusinessConfig) -> Self {
        Self::with_http(config, Client::new())
    }

    pub fn with_http(config: BusinessConfig, http: Client) -> Self {
        let (state, _) = watch::channel(UserCollectionState::default());
        Self {
            config,
            http,
            state,
            queue: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    /// Users from the last successful fetch, in server order.
    pub fn users(&self) -> Vec<UserRecord> {
        self.state.borrow().users.clone()
    }

    pub fn state(&self) -> UserCollectionState {
        self.state.borrow().clone()
    }

    /// Observe every change of the mirrored state.
    pub fn subscribe(&self) -> watch::Receiver<UserCollectionState> {
        self.state.subscribe()
    }

    /// GET the whole collection and replace the mirror with it.
    pub async fn fetch_all(&self) -> DirectoryResult<()> {
        let _turn = self.queue.lock().await;
        self.refresh().await
    }

    /// POST a new user, then resync.
    pub async fn add(&self, user: &UserRecord) -> DirectoryResult<()> {
        let url = self.config.users_url();
        self.mutate("adding", api::create_user(&self.http, &url, user))
            .await
    }

    /// PUT the whole record (it must carry an id), then resync.
    pub async fn update(&self, user: &UserRecord) -> DirectoryResult<()> {
        let url = self.config.users_url();
        self.mutate("updating", api::update_user(&self.http, &url, user))
            .await
    }

    /// DELETE the user with this id, then resync.
    ///
    /// Removing an id the server no longer knows still resyncs.
    pub async fn remove(&self, id: UserId) -> DirectoryResult<()> {
        let url = self.config.users_url();
        let request = async {
            let outcome = api::delete_user(&self.http, &url, id).await?;
            debug!("Delete of user {id}: {outcome:?}");
            Ok::<(), UserDirectoryError>(())
        };
        self.mutate("deleting", request).await
    }

    async fn mutate<F>(&self, verb: &str, request: F) -> DirectoryResult<()>
    where
        F: Future<Output = DirectoryResult<()>>,
    {
        let _turn = self.queue.lock().await;

        if let Err(err) = request.await {
            error!("Error {verb} user: {err}");
            return Err(err);
        }

        self.refresh()
            .await
            .map_err(|err| UserDirectoryError::Resync(Box::new(err)))
    }

    /// Fetch and replace. Callers must hold the queue.
    async fn refresh(&self) -> DirectoryResult<()> {
        let mut previous = SyncStatus::Idle;
        self.state.send_modify(|state| previous = state.loading());
        let pending = PendingFetch {
            state: &self.state,
            previous: Some(previous),
        };

        let fetched = api::list_users(&self.http, &self.config.users_url()).await;
        pending.settle();

        match fetched {
            Ok(users) => {
                info!("Fetched {} users", users.len());
                self.state.send_modify(|state| state.replace(users, Utc::now()));
                Ok(())
            }
            Err(err) => {
                error!("Error fetching users: {err}");
                self.state.send_modify(|state| state.failed(err.to_string()));
                Err(err)
            }
        }
    }
}

/// An in-flight fetch. Dropped unsettled, it puts the old status back.
struct PendingFetch<'a> {
    state: &'a watch::Sender<UserCollectionState>,
    previous: Option<SyncStatus>,
}

impl PendingFetch<'_> {
    fn settle(mut self) {
        self.previous = None;
    }
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            debug!("Fetch dropped before completion, restoring {previous:?}");
            self.state.send_modify(|state| state.restore(previous));
        }
    }
}
