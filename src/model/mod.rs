//! Wishlist domain types as exchanged with the backend.
//!
//! Wishes and comments are created server-side; the client only holds
//! read-through copies, plus locally buffered vote increments.

mod comment;
mod filter;
mod wish;

pub use comment::{Comment, CommentAuthor};
pub use filter::WishFilter;
pub use wish::{VoteRejection, Wish, WishDraft, WishState};
