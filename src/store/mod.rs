//! Wish store: the view-model of one wishlist session.
//!
//! Holds the last fetched wish list partitioned by state, applies votes
//! optimistically, and notifies observers after every change.
//!
//! # Fetch ordering
//!
//! Fetches are not cancelled or deduplicated. Each fetch takes a ticket
//! when it starts; a response is applied only if no fetch with a newer
//! ticket has been applied already, so a slow response can never replace
//! the result of a request issued after it. The status tracks the newest
//! fetch: a response or failure only settles it when no fetch issued later
//! is still in flight.
//!
//! # Notification order
//!
//! Every published change bumps [`WishListSnapshot::revision`]. Observers
//! see revisions in increasing order; a snapshot overtaken by a newer one
//! before delivery is dropped.

mod observers;
mod snapshot;
mod validation;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

pub use observers::{Observer, SubscriptionId};
pub use snapshot::{partition, FetchStatus, WishListSnapshot};

use crate::client::{ClientError, WishApi};
use crate::config::EmailField;
use crate::error::WishError;
use crate::model::{Comment, Wish, WishDraft};

use observers::ObserverRegistry;
use validation::{validate_comment, validate_draft};

/// Result of a fetch that reached the backend successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the cache.
    Applied { wishes: usize },
    /// A newer fetch had already been applied; the response was dropped.
    Superseded,
}

/// Options fixed for the lifetime of a store.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// The current user; decides "already voted" and "own wish".
    pub user: Uuid,
    pub email_field: EmailField,
}

impl StoreOptions {
    pub fn new(user: Uuid) -> Self {
        Self {
            user,
            email_field: EmailField::default(),
        }
    }
}

#[derive(Default)]
struct StoreState {
    snapshot: WishListSnapshot,
    /// Ticket of the fetch whose response is currently cached.
    applied_ticket: u64,
    in_flight: BTreeSet<u64>,
}

impl StoreState {
    fn has_newer_in_flight(&self, ticket: u64) -> bool {
        self.in_flight.range(ticket + 1..).next().is_some()
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut Wish> {
        self.snapshot
            .partitions
            .values_mut()
            .flatten()
            .find(|w| w.id == id)
    }
}

struct Inner {
    client: Arc<dyn WishApi>,
    options: StoreOptions,
    state: RwLock<StoreState>,
    observers: ObserverRegistry,
    issued_tickets: AtomicU64,
}

/// Shared handle to a session's wish list. Clones share state.
#[derive(Clone)]
pub struct WishStore {
    inner: Arc<Inner>,
}

impl WishStore {
    pub fn new(client: Arc<dyn WishApi>, options: StoreOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                options,
                state: RwLock::new(StoreState::default()),
                observers: ObserverRegistry::default(),
                issued_tickets: AtomicU64::new(0),
            }),
        }
    }

    pub fn user(&self) -> Uuid {
        self.inner.options.user
    }

    pub fn options(&self) -> StoreOptions {
        self.inner.options
    }

    /// Current state of the store.
    pub fn snapshot(&self) -> WishListSnapshot {
        self.inner.state.read().snapshot.clone()
    }

    pub fn subscribe(&self, observer: Observer) -> SubscriptionId {
        self.inner.observers.subscribe(observer)
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Mutate state under the write lock, then notify observers with the
    /// resulting snapshot after the lock is released.
    fn update<R>(&self, f: impl FnOnce(&mut StoreState) -> (R, bool)) -> R {
        let (result, snapshot) = {
            let mut state = self.inner.state.write();
            let (result, changed) = f(&mut state);
            if changed {
                state.snapshot.revision += 1;
            }
            (result, changed.then(|| state.snapshot.clone()))
        };
        if let Some(snapshot) = snapshot {
            self.inner.observers.notify(&snapshot);
        }
        result
    }

    /// Retrieve the full list and replace the cache.
    ///
    /// On failure the cache is left as it was and the status becomes
    /// [`FetchStatus::Error`].
    pub async fn fetch_list(&self) -> Result<FetchOutcome, WishError> {
        let ticket = self.inner.issued_tickets.fetch_add(1, Ordering::SeqCst) + 1;
        self.update(|state| {
            state.in_flight.insert(ticket);
            let changed = state.snapshot.status != FetchStatus::Fetching;
            state.snapshot.status = FetchStatus::Fetching;
            ((), changed)
        });
        tracing::debug!(ticket, "Fetching wish list");

        match self.inner.client.fetch_wishes().await {
            Ok(wishes) => Ok(self.apply_fetch(ticket, wishes)),
            Err(err) => {
                tracing::warn!(ticket, error = %err, "Wish list fetch failed, keeping previous list");
                let message = err.to_string();
                self.update(|state| {
                    state.in_flight.remove(&ticket);
                    // A newer fetch is still running or already applied.
                    if state.has_newer_in_flight(ticket) || ticket < state.applied_ticket {
                        return ((), false);
                    }
                    state.snapshot.status = FetchStatus::Error(message);
                    ((), true)
                });
                Err(err.into())
            }
        }
    }

    fn apply_fetch(&self, ticket: u64, wishes: Vec<Wish>) -> FetchOutcome {
        self.update(|state| {
            state.in_flight.remove(&ticket);
            if ticket < state.applied_ticket {
                tracing::debug!(
                    ticket,
                    applied = state.applied_ticket,
                    "Dropping stale wish list response"
                );
                return (FetchOutcome::Superseded, false);
            }

            let count = wishes.len();
            state.snapshot.partitions = partition(wishes);
            state.snapshot.generation += 1;
            state.applied_ticket = ticket;
            if !state.has_newer_in_flight(ticket) {
                state.snapshot.status = FetchStatus::Fetched;
            }
            tracing::info!(ticket, wishes = count, "Wish list updated");
            (FetchOutcome::Applied { wishes: count }, true)
        })
    }

    /// Run [`WishStore::fetch_list`] on the tokio runtime and hand the
    /// result to `completion`. Must be called from within a runtime.
    pub fn fetch_list_with<F>(&self, completion: F) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(Result<FetchOutcome, WishError>) + Send + 'static,
    {
        let store = self.clone();
        tokio::spawn(async move {
            let result = store.fetch_list().await;
            completion(result);
        })
    }

    /// Vote for a wish on behalf of the current user.
    ///
    /// The count is incremented before the request is sent. If the request
    /// fails the increment is reverted, unless a fetch has replaced the
    /// list in the meantime, and the error is returned.
    pub async fn upvote(&self, wish_id: Uuid) -> Result<(), WishError> {
        let user = self.inner.options.user;

        let generation = self.update(|state| {
            let generation = state.snapshot.generation;
            let Some(wish) = state.find_mut(wish_id) else {
                return (Err(WishError::WishNotFound { id: wish_id }), false);
            };
            if let Some(rejection) = wish.vote_rejection(user) {
                return (Err(WishError::VoteNotPermitted(rejection)), false);
            }
            wish.apply_vote(user);
            (Ok(generation), true)
        })?;

        tracing::debug!(wish = %wish_id, "Submitting vote");
        let Err(err) = self.inner.client.submit_vote(wish_id).await else {
            return Ok(());
        };

        let reverted = self.update(|state| {
            if state.snapshot.generation != generation {
                return (false, false);
            }
            match state.find_mut(wish_id) {
                Some(wish) => {
                    wish.revert_vote(user);
                    (true, true)
                }
                None => (false, false),
            }
        });
        tracing::warn!(wish = %wish_id, reverted, error = %err, "Vote failed");
        Err(err.into())
    }

    /// Create a wish with a title and description.
    pub async fn create_wish(&self, title: &str, description: &str) -> Result<(), WishError> {
        self.create_wish_draft(WishDraft::new(title, description)).await
    }

    /// Validate and submit `draft`, then refresh the list.
    ///
    /// The wish exists once the backend accepted it, so a failing refresh
    /// is logged and recorded in the fetch status but not returned.
    pub async fn create_wish_draft(&self, draft: WishDraft) -> Result<(), WishError> {
        let draft = validate_draft(&draft, self.inner.options.email_field)?;
        self.inner.client.submit_wish(&draft).await?;
        tracing::info!(title = %draft.title, "Wish created");

        if let Err(err) = self.fetch_list().await {
            tracing::warn!(error = %err, "Refresh after creating wish failed");
        }
        Ok(())
    }

    /// Load the comments of a wish and attach them to the cached copy.
    pub async fn fetch_comments(&self, wish_id: Uuid) -> Result<Vec<Comment>, WishError> {
        let comments = self.inner.client.fetch_comments(wish_id).await?;
        let cached = comments.clone();
        self.update(|state| match state.find_mut(wish_id) {
            Some(wish) => {
                wish.comment_list = Some(cached);
                ((), true)
            }
            None => ((), false),
        });
        Ok(comments)
    }

    /// Post a comment and append it to the cached wish.
    pub async fn create_comment(&self, wish_id: Uuid, text: &str) -> Result<Comment, WishError> {
        let text = validate_comment(text)?;
        let comment = self
            .inner
            .client
            .submit_comment(wish_id, text)
            .await
            .map_err(|err: ClientError| {
                tracing::warn!(wish = %wish_id, error = %err, "Comment failed");
                err
            })?;

        let cached = comment.clone();
        self.update(|state| match state.find_mut(wish_id) {
            Some(wish) => {
                wish.comment_list.get_or_insert_with(Vec::new).push(cached);
                ((), true)
            }
            None => ((), false),
        });
        Ok(comment)
    }
}
