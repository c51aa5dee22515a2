use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentAuthor {
    Admin,
    User,
}

/// A comment attached to a single wish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    /// Comment text. The backend calls this field `description`.
    #[serde(rename = "description")]
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_admin: bool,
}

impl Comment {
    pub fn author(&self) -> CommentAuthor {
        if self.is_admin {
            CommentAuthor::Admin
        } else {
            CommentAuthor::User
        }
    }
}
