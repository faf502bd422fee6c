use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub const TABLE_NAME: &str = "votes";

/// Direction of a cast vote. Stored as `vote_type` 1 / -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Upvote,
    Downvote,
}

impl VoteKind {
    pub fn vote_type(&self) -> i8 {
        match self {
            VoteKind::Upvote => 1,
            VoteKind::Downvote => -1,
        }
    }

    pub fn from_vote_type(value: i8) -> Option<Self> {
        match value {
            1 => Some(VoteKind::Upvote),
            -1 => Some(VoteKind::Downvote),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Vote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub post_id: Thing,
    pub user_id: Thing,
    pub vote_type: i8,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}
