use async_trait::async_trait;

use crate::entities::vote_entity::VoteKind;
use crate::middleware::error::AppResult;

#[async_trait]
pub trait VotesRepositoryInterface {
    async fn get_vote(&self, post_id: &str, user_id: &str) -> AppResult<Option<VoteKind>>;
    async fn upsert_vote(&self, post_id: &str, user_id: &str, kind: VoteKind) -> AppResult<()>;
    async fn remove_vote(&self, post_id: &str, user_id: &str) -> AppResult<()>;
}
