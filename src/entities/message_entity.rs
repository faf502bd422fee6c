use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub const TABLE_NAME: &str = "messages";

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub sender_id: Thing,
    pub receiver_id: Thing,
    pub content: String,
    pub read: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateMessage {
    pub sender_id: Thing,
    pub receiver_id: Thing,
    pub content: String,
    pub read: bool,
}
