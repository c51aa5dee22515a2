//! Errors surfaced by the wish store.
//!
//! Every failure reaches the caller through a `Result`; nothing is retried.

use thiserror::Error;
use uuid::Uuid;

use crate::client::ClientError;
use crate::i18n::LocalizationKey;
use crate::model::{VoteRejection, WishState};

/// Input refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title and description must not be empty")]
    EmptyTitleOrDescription,
    #[error("comment must not be empty")]
    EmptyComment,
    #[error("an email address is required")]
    EmailRequired,
    #[error("email address is malformed")]
    EmailFormat,
}

#[derive(Debug, Error)]
pub enum WishError {
    /// The backend call failed (network, status or decode)
    #[error(transparent)]
    Remote(#[from] ClientError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Vote not permitted: {0}")]
    VoteNotPermitted(VoteRejection),

    /// The wish is not in the current list
    #[error("Wish '{id}' not found")]
    WishNotFound { id: Uuid },
}

impl WishError {
    /// Error category name.
    pub fn error_type(&self) -> &'static str {
        match self {
            WishError::Remote(err) if err.is_decode() => "decode",
            WishError::Remote(_) => "network",
            WishError::Validation(_) => "validation",
            WishError::VoteNotPermitted(_) => "vote_not_permitted",
            WishError::WishNotFound { .. } => "not_found",
        }
    }

    /// Key of the user-facing message for this error.
    pub fn localization_key(&self) -> LocalizationKey {
        match self {
            WishError::Validation(ValidationError::EmptyTitleOrDescription) => {
                LocalizationKey::TitleDescriptionCannotBeEmpty
            }
            WishError::Validation(ValidationError::EmptyComment) => LocalizationKey::WriteAComment,
            WishError::Validation(ValidationError::EmailRequired) => {
                LocalizationKey::EmailRequiredText
            }
            WishError::Validation(ValidationError::EmailFormat) => {
                LocalizationKey::EmailFormatWrongText
            }
            WishError::VoteNotPermitted(VoteRejection::AlreadyVoted) => {
                LocalizationKey::YouCanOnlyVoteOnce
            }
            WishError::VoteNotPermitted(VoteRejection::OwnWish) => {
                LocalizationKey::YouCanNotVoteForYourOwnWish
            }
            WishError::VoteNotPermitted(VoteRejection::Closed { .. }) => {
                LocalizationKey::YouCanNotVoteForAnImplementedWish
            }
            WishError::Remote(_) | WishError::WishNotFound { .. } => {
                LocalizationKey::SomethingWentWrong
            }
        }
    }

    pub fn is_vote_not_permitted(&self) -> bool {
        matches!(self, WishError::VoteNotPermitted(_))
    }

    /// State that blocked a vote, if that is what failed.
    pub fn closed_state(&self) -> Option<WishState> {
        match self {
            WishError::VoteNotPermitted(VoteRejection::Closed { state }) => Some(*state),
            _ => None,
        }
    }
}
