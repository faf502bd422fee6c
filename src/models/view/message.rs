use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::message_entity::Message;
use crate::models::view::user::UserView;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageView {
    fn from(message: Message) -> Self {
        MessageView {
            id: message.id.map(|id| id.to_raw()).unwrap_or_default(),
            sender_id: message.sender_id.to_raw(),
            receiver_id: message.receiver_id.to_raw(),
            content: message.content,
            read: message.read,
            created_at: message.created_at,
        }
    }
}

/// Per-partner rollup of a user's message history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    pub other_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_user: Option<UserView>,
    pub last_message: MessageView,
    pub unread_count: i64,
}
