use async_trait::async_trait;

use crate::middleware::error::AppResult;
use crate::models::view::message::MessageView;

#[async_trait]
pub trait MessagesRepositoryInterface {
    /// Every message the user sent or received, ascending by created_at.
    async fn get_messages(&self, user_id: &str) -> AppResult<Vec<MessageView>>;
    /// Both directions between the two participants, ascending by created_at.
    async fn get_conversation_messages(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> AppResult<Vec<MessageView>>;
    async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> AppResult<MessageView>;
    /// Marks messages the user received from the other participant as read.
    async fn mark_messages_as_read(&self, user_id: &str, other_user_id: &str) -> AppResult<()>;
}
