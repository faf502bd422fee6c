use std::sync::Arc;

use async_trait::async_trait;

use crate::database::client::Db;
use crate::entities::message_entity::{CreateMessage, Message, TABLE_NAME};
use crate::entities::profile_entity::TABLE_NAME as PROFILES_TABLE_NAME;
use crate::interfaces::repositories::messages::MessagesRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::string_utils::get_str_thing;
use crate::models::view::message::MessageView;

#[derive(Debug)]
pub struct MessagesRepository {
    client: Arc<Db>,
}

impl MessagesRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS sender_id ON TABLE {TABLE_NAME} TYPE record<{PROFILES_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS receiver_id ON TABLE {TABLE_NAME} TYPE record<{PROFILES_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS content ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS read ON TABLE {TABLE_NAME} TYPE bool DEFAULT false;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    DEFINE INDEX IF NOT EXISTS messages_sender_idx ON TABLE {TABLE_NAME} COLUMNS sender_id;
    DEFINE INDEX IF NOT EXISTS messages_receiver_idx ON TABLE {TABLE_NAME} COLUMNS receiver_id;
");
        let mutation = self.client.query(sql).await?;
        mutation.check().expect("should mutate messages");

        Ok(())
    }
}

#[async_trait]
impl MessagesRepositoryInterface for MessagesRepository {
    async fn get_messages(&self, user_id: &str) -> AppResult<Vec<MessageView>> {
        let user = get_str_thing(user_id)?;
        let mut res = self
            .client
            .query(format!(
                "SELECT * FROM {TABLE_NAME} WHERE sender_id = $user OR receiver_id = $user ORDER BY created_at ASC;"
            ))
            .bind(("user", user))
            .await?;
        let messages = res.take::<Vec<Message>>(0)?;
        Ok(messages.into_iter().map(MessageView::from).collect())
    }

    async fn get_conversation_messages(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> AppResult<Vec<MessageView>> {
        let user = get_str_thing(user_id)?;
        let other = get_str_thing(other_user_id)?;
        let mut res = self
            .client
            .query(format!(
                "SELECT * FROM {TABLE_NAME} \
                WHERE (sender_id = $user AND receiver_id = $other) \
                OR (sender_id = $other AND receiver_id = $user) \
                ORDER BY created_at ASC;"
            ))
            .bind(("user", user))
            .bind(("other", other))
            .await?;
        let messages = res.take::<Vec<Message>>(0)?;
        Ok(messages.into_iter().map(MessageView::from).collect())
    }

    async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> AppResult<MessageView> {
        let sender = get_str_thing(sender_id)?;
        let receiver = get_str_thing(receiver_id)?;

        let created: Option<Message> = self
            .client
            .create(TABLE_NAME)
            .content(CreateMessage {
                sender_id: sender,
                receiver_id: receiver,
                content: content.to_string(),
                read: false,
            })
            .await?;

        created.map(MessageView::from).ok_or(AppError::Generic {
            description: "message create returned no record".to_string(),
        })
    }

    async fn mark_messages_as_read(&self, user_id: &str, other_user_id: &str) -> AppResult<()> {
        let user = get_str_thing(user_id)?;
        let other = get_str_thing(other_user_id)?;
        self.client
            .query(format!(
                "UPDATE {TABLE_NAME} SET read = true WHERE receiver_id = $user AND sender_id = $other;"
            ))
            .bind(("user", user))
            .bind(("other", other))
            .await?
            .check()?;
        Ok(())
    }
}
