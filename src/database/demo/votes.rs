use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::database::demo_store::{LocalKvStore, KEY_USER_VOTES};
use crate::entities::vote_entity::VoteKind;
use crate::interfaces::repositories::votes::VotesRepositoryInterface;
use crate::middleware::error::AppResult;

/// Demo votes live in a post-id keyed map under `userVotes`, the contract the
/// demo client kept in browser storage. The map is per-store, so the user
/// dimension collapses to the single demo identity.
pub struct DemoVotesRepository {
    store: Arc<LocalKvStore>,
}

impl DemoVotesRepository {
    pub fn new(store: Arc<LocalKvStore>) -> Self {
        Self { store }
    }

    fn votes(&self) -> AppResult<HashMap<String, VoteKind>> {
        Ok(self
            .store
            .get_item::<HashMap<String, VoteKind>>(KEY_USER_VOTES)?
            .unwrap_or_default())
    }
}

#[async_trait]
impl VotesRepositoryInterface for DemoVotesRepository {
    async fn get_vote(&self, post_id: &str, _user_id: &str) -> AppResult<Option<VoteKind>> {
        self.store.simulate_latency().await;
        Ok(self.votes()?.get(post_id).copied())
    }

    async fn upsert_vote(&self, post_id: &str, _user_id: &str, kind: VoteKind) -> AppResult<()> {
        self.store.simulate_latency().await;
        let mut votes = self.votes()?;
        votes.insert(post_id.to_string(), kind);
        self.store.set_item(KEY_USER_VOTES, &votes)
    }

    async fn remove_vote(&self, post_id: &str, _user_id: &str) -> AppResult<()> {
        self.store.simulate_latency().await;
        let mut votes = self.votes()?;
        votes.remove(post_id);
        self.store.set_item(KEY_USER_VOTES, &votes)
    }
}
