//! Remote client for the wishlist backend.
//!
//! [`WishApi`] is the contract the store consumes; [`HttpWishClient`] is
//! the reqwest implementation used in production.

mod error;
mod http;

use async_trait::async_trait;
use uuid::Uuid;

pub use error::ClientError;
pub use http::{HttpWishClient, Route};

use crate::model::{Comment, Wish, WishDraft};

#[async_trait]
pub trait WishApi: Send + Sync {
    /// Retrieve the complete wish list.
    async fn fetch_wishes(&self) -> Result<Vec<Wish>, ClientError>;

    /// Register one vote of the current user.
    async fn submit_vote(&self, wish_id: Uuid) -> Result<(), ClientError>;

    async fn submit_wish(&self, draft: &WishDraft) -> Result<(), ClientError>;

    async fn fetch_comments(&self, wish_id: Uuid) -> Result<Vec<Comment>, ClientError>;

    /// Post a comment and return it as stored by the backend.
    async fn submit_comment(&self, wish_id: Uuid, text: &str) -> Result<Comment, ClientError>;
}
