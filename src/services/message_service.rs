use std::collections::HashMap;

use futures::future::join_all;
use serde::Deserialize;
use validator::Validate;

use crate::database::DataStores;
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::message::{ConversationView, MessageView};

#[derive(Debug, Deserialize, Validate)]
pub struct MessageInput {
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub content: String,
}

pub struct MessageService<'a> {
    data: &'a DataStores,
}

impl<'a> MessageService<'a> {
    pub fn new(data: &'a DataStores) -> Self {
        Self { data }
    }

    pub async fn get_messages(&self, user_id: &str) -> AppResult<Vec<MessageView>> {
        self.data.messages.get_messages(user_id).await
    }

    pub async fn get_conversation(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> AppResult<Vec<MessageView>> {
        self.data
            .messages
            .get_conversation_messages(user_id, other_user_id)
            .await
    }

    pub async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        input: MessageInput,
    ) -> AppResult<MessageView> {
        self.data
            .profiles
            .get_profile_by_id(receiver_id)
            .await?
            .ok_or_else(|| AppError::EntityFailIdNotFound {
                ident: receiver_id.to_string(),
            })?;

        self.data
            .messages
            .send_message(sender_id, receiver_id, &input.content)
            .await
    }

    pub async fn mark_conversation_read(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> AppResult<()> {
        self.data
            .messages
            .mark_messages_as_read(user_id, other_user_id)
            .await
    }

    /// Folds the user's message history into one summary per partner:
    /// latest message and how many received messages are still unread.
    pub async fn get_conversations(&self, user_id: &str) -> AppResult<Vec<ConversationView>> {
        let messages = self.data.messages.get_messages(user_id).await?;

        let mut latest: HashMap<String, MessageView> = HashMap::new();
        let mut unread: HashMap<String, i64> = HashMap::new();
        for message in messages {
            let partner_id = if message.sender_id == user_id {
                message.receiver_id.clone()
            } else {
                message.sender_id.clone()
            };
            if message.receiver_id == user_id && !message.read {
                *unread.entry(partner_id.clone()).or_default() += 1;
            }
            // messages arrive ascending, so the last write wins
            latest.insert(partner_id, message);
        }

        let partner_profiles = join_all(
            latest
                .keys()
                .map(|partner_id| self.data.profiles.get_profile_by_id(partner_id)),
        )
        .await;
        let mut profiles = HashMap::new();
        for result in partner_profiles {
            if let Some(profile) = result? {
                profiles.insert(profile.id.clone(), profile);
            }
        }

        let mut conversations: Vec<ConversationView> = latest
            .into_iter()
            .map(|(partner_id, last_message)| ConversationView {
                other_user: profiles.get(&partner_id).cloned(),
                unread_count: unread.get(&partner_id).copied().unwrap_or(0),
                other_user_id: partner_id,
                last_message,
            })
            .collect();
        conversations.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));

        Ok(conversations)
    }
}
