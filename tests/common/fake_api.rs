//! In-process `WishApi` with scripted, optionally gated responses.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::oneshot;
use uuid::Uuid;
use wishkit::client::{ClientError, WishApi};
use wishkit::model::{Comment, Wish, WishDraft};

type Scripted<T> = Result<T, u16>;

struct Step<T> {
    result: Scripted<T>,
    gate: Option<oneshot::Receiver<()>>,
}

fn status(code: u16) -> ClientError {
    ClientError::Status {
        status: code,
        message: format!("scripted failure {}", code),
    }
}

/// Records every call. Unscripted fetches return an empty list and
/// unscripted mutations succeed.
#[derive(Default)]
pub struct FakeWishApi {
    fetches: Mutex<VecDeque<Step<Vec<Wish>>>>,
    votes: Mutex<VecDeque<Step<()>>>,
    submits: Mutex<VecDeque<Scripted<()>>>,
    comments: Mutex<VecDeque<Scripted<Vec<Comment>>>>,
    posted_comments: Mutex<VecDeque<Scripted<Comment>>>,
    fetch_calls: Mutex<usize>,
    vote_calls: Mutex<Vec<Uuid>>,
    submitted: Mutex<Vec<WishDraft>>,
    comment_posts: Mutex<Vec<(Uuid, String)>>,
}

impl FakeWishApi {
    pub fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self::default())
    }

    pub fn push_fetch(&self, result: Scripted<Vec<Wish>>) {
        self.fetches.lock().push_back(Step { result, gate: None });
    }

    /// Queue a fetch response that is held back until the returned sender
    /// fires (or is dropped).
    pub fn push_gated_fetch(&self, result: Scripted<Vec<Wish>>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.fetches.lock().push_back(Step {
            result,
            gate: Some(rx),
        });
        tx
    }

    pub fn push_vote(&self, result: Scripted<()>) {
        self.votes.lock().push_back(Step { result, gate: None });
    }

    pub fn push_gated_vote(&self, result: Scripted<()>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.votes.lock().push_back(Step {
            result,
            gate: Some(rx),
        });
        tx
    }

    pub fn push_submit(&self, result: Scripted<()>) {
        self.submits.lock().push_back(result);
    }

    pub fn push_comments(&self, result: Scripted<Vec<Comment>>) {
        self.comments.lock().push_back(result);
    }

    pub fn push_posted_comment(&self, result: Scripted<Comment>) {
        self.posted_comments.lock().push_back(result);
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock()
    }

    pub fn vote_calls(&self) -> Vec<Uuid> {
        self.vote_calls.lock().clone()
    }

    pub fn submitted(&self) -> Vec<WishDraft> {
        self.submitted.lock().clone()
    }

    pub fn comment_posts(&self) -> Vec<(Uuid, String)> {
        self.comment_posts.lock().clone()
    }
}

async fn run_step<T>(step: Step<T>) -> Result<T, ClientError> {
    if let Some(gate) = step.gate {
        let _ = gate.await;
    }
    step.result.map_err(status)
}

#[async_trait]
impl WishApi for FakeWishApi {
    async fn fetch_wishes(&self) -> Result<Vec<Wish>, ClientError> {
        let step = self.fetches.lock().pop_front();
        *self.fetch_calls.lock() += 1;
        match step {
            Some(step) => run_step(step).await,
            None => Ok(Vec::new()),
        }
    }

    async fn submit_vote(&self, wish_id: Uuid) -> Result<(), ClientError> {
        self.vote_calls.lock().push(wish_id);
        let step = self.votes.lock().pop_front();
        match step {
            Some(step) => run_step(step).await,
            None => Ok(()),
        }
    }

    async fn submit_wish(&self, draft: &WishDraft) -> Result<(), ClientError> {
        self.submitted.lock().push(draft.clone());
        let result = self.submits.lock().pop_front().unwrap_or(Ok(()));
        result.map_err(status)
    }

    async fn fetch_comments(&self, _wish_id: Uuid) -> Result<Vec<Comment>, ClientError> {
        let result = self.comments.lock().pop_front().unwrap_or(Ok(Vec::new()));
        result.map_err(status)
    }

    async fn submit_comment(&self, wish_id: Uuid, text: &str) -> Result<Comment, ClientError> {
        self.comment_posts.lock().push((wish_id, text.to_string()));
        let result = self.posted_comments.lock().pop_front().unwrap_or(Err(500));
        result.map_err(status)
    }
}
