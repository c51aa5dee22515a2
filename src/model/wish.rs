use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::comment::Comment;

/// Lifecycle stage of a wish.
///
/// Ordering follows the lifecycle and is used as the partition order of the
/// store's cache. Transitions are owned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WishState {
    /// Submitted and waiting for review. Older backends call this `requested`.
    #[serde(alias = "requested")]
    Pending,
    Approved,
    InReview,
    Planned,
    InProgress,
    Implemented,
    Completed,
    Rejected,
}

impl WishState {
    pub const ALL: [WishState; 8] = [
        WishState::Pending,
        WishState::Approved,
        WishState::InReview,
        WishState::Planned,
        WishState::InProgress,
        WishState::Implemented,
        WishState::Completed,
        WishState::Rejected,
    ];

    /// Wishes in a closed state no longer accept votes.
    pub fn is_closed(self) -> bool {
        matches!(
            self,
            WishState::Implemented | WishState::Completed | WishState::Rejected
        )
    }

    /// Wire name, as sent by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            WishState::Pending => "pending",
            WishState::Approved => "approved",
            WishState::InReview => "inReview",
            WishState::Planned => "planned",
            WishState::InProgress => "inProgress",
            WishState::Implemented => "implemented",
            WishState::Completed => "completed",
            WishState::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for WishState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason an upvote is refused before reaching the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteRejection {
    AlreadyVoted,
    Closed { state: WishState },
    OwnWish,
}

impl std::fmt::Display for VoteRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteRejection::AlreadyVoted => write!(f, "already voted on this wish"),
            VoteRejection::Closed { state } => write!(f, "wish is {}", state),
            VoteRejection::OwnWish => write!(f, "cannot vote for your own wish"),
        }
    }
}

/// A user-submitted feature request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub id: Uuid,
    /// Identifier of the user who created the wish.
    pub user_uuid: Uuid,
    pub title: String,
    pub description: String,
    pub state: WishState,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub voting_users: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comment_list: Option<Vec<Comment>>,
}

impl Wish {
    pub fn has_voted(&self, user: Uuid) -> bool {
        self.voting_users.contains(&user)
    }

    /// Returns why `user` may not upvote this wish, if anything.
    pub fn vote_rejection(&self, user: Uuid) -> Option<VoteRejection> {
        if self.has_voted(user) {
            return Some(VoteRejection::AlreadyVoted);
        }
        if self.state.is_closed() {
            return Some(VoteRejection::Closed { state: self.state });
        }
        if self.user_uuid == user {
            return Some(VoteRejection::OwnWish);
        }
        None
    }

    /// Optimistic half of an upvote.
    pub fn apply_vote(&mut self, user: Uuid) {
        self.vote_count = self.vote_count.saturating_add(1);
        self.voting_users.push(user);
    }

    /// Exact inverse of [`Wish::apply_vote`].
    pub fn revert_vote(&mut self, user: Uuid) {
        self.vote_count = self.vote_count.saturating_sub(1);
        if let Some(pos) = self.voting_users.iter().rposition(|u| *u == user) {
            self.voting_users.remove(pos);
        }
    }

    pub fn comments(&self) -> &[Comment] {
        self.comment_list.as_deref().unwrap_or(&[])
    }
}

/// A wish about to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl WishDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wish(state: WishState, owner: Uuid) -> Wish {
        Wish {
            id: Uuid::new_v4(),
            user_uuid: owner,
            title: "Dark mode".to_string(),
            description: "Please".to_string(),
            state,
            vote_count: 3,
            voting_users: Vec::new(),
            created_at: Utc::now(),
            comment_list: None,
        }
    }

    #[test]
    fn test_requested_is_alias_for_pending() {
        let state: WishState = serde_json::from_str("\"requested\"").unwrap();
        assert_eq!(state, WishState::Pending);
        let state: WishState = serde_json::from_str("\"inProgress\"").unwrap();
        assert_eq!(state, WishState::InProgress);
    }

    #[test]
    fn test_vote_rejection_order() {
        let me = Uuid::new_v4();
        let mut own_closed = wish(WishState::Implemented, me);
        assert_eq!(
            own_closed.vote_rejection(me),
            Some(VoteRejection::Closed {
                state: WishState::Implemented
            })
        );
        own_closed.voting_users.push(me);
        assert_eq!(own_closed.vote_rejection(me), Some(VoteRejection::AlreadyVoted));

        let own_open = wish(WishState::Approved, me);
        assert_eq!(own_open.vote_rejection(me), Some(VoteRejection::OwnWish));

        let other = wish(WishState::Planned, Uuid::new_v4());
        assert_eq!(other.vote_rejection(me), None);
    }

    #[test]
    fn test_rejected_and_completed_are_closed() {
        assert!(WishState::Rejected.is_closed());
        assert!(WishState::Completed.is_closed());
        assert!(!WishState::InProgress.is_closed());
    }

    #[test]
    fn test_revert_vote_undoes_apply_vote() {
        let me = Uuid::new_v4();
        let mut w = wish(WishState::Approved, Uuid::new_v4());
        let before = w.clone();
        w.apply_vote(me);
        assert_eq!(w.vote_count, 4);
        assert!(w.has_voted(me));
        w.revert_vote(me);
        assert_eq!(w, before);
    }

    #[test]
    fn test_draft_omits_missing_email() {
        let json = serde_json::to_value(WishDraft::new("a", "b")).unwrap();
        assert!(json.get("email").is_none());
        let json = serde_json::to_value(WishDraft::new("a", "b").with_email("x@y.z")).unwrap();
        assert_eq!(json["email"], "x@y.z");
    }
}
