use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::database::demo::random_id;
use crate::database::demo_store::{LocalKvStore, KEY_MESSAGES};
use crate::interfaces::repositories::messages::MessagesRepositoryInterface;
use crate::middleware::error::AppResult;
use crate::models::view::message::MessageView;

pub struct DemoMessagesRepository {
    store: Arc<LocalKvStore>,
}

impl DemoMessagesRepository {
    pub fn new(store: Arc<LocalKvStore>) -> Self {
        Self { store }
    }

    fn messages(&self) -> AppResult<Vec<MessageView>> {
        Ok(self
            .store
            .get_item::<Vec<MessageView>>(KEY_MESSAGES)?
            .unwrap_or_default())
    }
}

#[async_trait]
impl MessagesRepositoryInterface for DemoMessagesRepository {
    async fn get_messages(&self, user_id: &str) -> AppResult<Vec<MessageView>> {
        self.store.simulate_latency().await;
        Ok(self
            .messages()?
            .into_iter()
            .filter(|msg| msg.sender_id == user_id || msg.receiver_id == user_id)
            .collect())
    }

    async fn get_conversation_messages(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> AppResult<Vec<MessageView>> {
        self.store.simulate_latency().await;
        Ok(self
            .messages()?
            .into_iter()
            .filter(|msg| {
                (msg.sender_id == user_id && msg.receiver_id == other_user_id)
                    || (msg.sender_id == other_user_id && msg.receiver_id == user_id)
            })
            .collect())
    }

    async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> AppResult<MessageView> {
        self.store.simulate_latency().await;
        let message = MessageView {
            id: random_id(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            read: false,
            created_at: Utc::now(),
        };

        let mut messages = self.messages()?;
        messages.push(message.clone());
        self.store.set_item(KEY_MESSAGES, &messages)?;

        Ok(message)
    }

    async fn mark_messages_as_read(&self, user_id: &str, other_user_id: &str) -> AppResult<()> {
        self.store.simulate_latency().await;
        let mut messages = self.messages()?;
        for msg in messages.iter_mut() {
            if msg.receiver_id == user_id && msg.sender_id == other_user_id {
                msg.read = true;
            }
        }
        self.store.set_item(KEY_MESSAGES, &messages)
    }
}
