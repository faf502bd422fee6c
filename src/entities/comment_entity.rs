use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub const TABLE_NAME: &str = "comments";

#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub post_id: Thing,
    pub author_id: Thing,
    pub content: String,
    pub upvotes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Thing>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateComment {
    pub post_id: Thing,
    pub author_id: Thing,
    pub content: String,
    pub upvotes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Thing>,
}
