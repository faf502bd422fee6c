use std::sync::Arc;

use async_trait::async_trait;

use crate::database::client::Db;
use crate::entities::post_entity::TABLE_NAME as POSTS_TABLE_NAME;
use crate::entities::profile_entity::TABLE_NAME as PROFILES_TABLE_NAME;
use crate::entities::vote_entity::{Vote, VoteKind, TABLE_NAME};
use crate::interfaces::repositories::votes::VotesRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::string_utils::get_str_thing;

#[derive(Debug)]
pub struct VotesRepository {
    client: Arc<Db>,
}

impl VotesRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS post_id ON TABLE {TABLE_NAME} TYPE record<{POSTS_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS user_id ON TABLE {TABLE_NAME} TYPE record<{PROFILES_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS vote_type ON TABLE {TABLE_NAME} TYPE number ASSERT $value IN [1, -1];
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    DEFINE INDEX IF NOT EXISTS votes_post_user_idx ON TABLE {TABLE_NAME} COLUMNS post_id, user_id UNIQUE;
");
        let mutation = self.client.query(sql).await?;
        mutation.check().expect("should mutate votes");

        Ok(())
    }
}

#[async_trait]
impl VotesRepositoryInterface for VotesRepository {
    async fn get_vote(&self, post_id: &str, user_id: &str) -> AppResult<Option<VoteKind>> {
        let post = get_str_thing(post_id)?;
        let user = get_str_thing(user_id)?;
        let mut res = self
            .client
            .query(format!(
                "SELECT * FROM {TABLE_NAME} WHERE post_id = $post AND user_id = $user;"
            ))
            .bind(("post", post))
            .bind(("user", user))
            .await?;
        let vote = res.take::<Option<Vote>>(0)?;
        Ok(vote.and_then(|v| VoteKind::from_vote_type(v.vote_type)))
    }

    async fn upsert_vote(&self, post_id: &str, user_id: &str, kind: VoteKind) -> AppResult<()> {
        let post = get_str_thing(post_id)?;
        let user = get_str_thing(user_id)?;
        self.client
            .query(format!(
                "BEGIN TRANSACTION; \
                LET $id = (SELECT id FROM {TABLE_NAME} WHERE post_id=$post AND user_id=$user)[0].id; \
                IF $id THEN UPDATE $id SET vote_type=$vote_type ELSE CREATE {TABLE_NAME} SET post_id=$post, user_id=$user, vote_type=$vote_type END; \
                COMMIT TRANSACTION;"
            ))
            .bind(("post", post))
            .bind(("user", user))
            .bind(("vote_type", kind.vote_type() as i64))
            .await?
            .check()?;
        Ok(())
    }

    async fn remove_vote(&self, post_id: &str, user_id: &str) -> AppResult<()> {
        let post = get_str_thing(post_id)?;
        let user = get_str_thing(user_id)?;
        self.client
            .query(format!(
                "DELETE {TABLE_NAME} WHERE post_id=$post AND user_id=$user;"
            ))
            .bind(("post", post))
            .bind(("user", user))
            .await?
            .check()?;
        Ok(())
    }
}
