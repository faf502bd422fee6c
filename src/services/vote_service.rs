use serde::{Deserialize, Serialize};

use crate::database::DataStores;
use crate::entities::vote_entity::VoteKind;
use crate::middleware::error::{AppError, AppResult};

/// One step of the vote state machine. Returns the next vote state and the
/// delta to apply to the post's counter:
/// repeating the current vote cancels it (∓1), switching sides swings by 2,
/// voting from a clean slate moves by 1.
pub fn tally_transition(
    current: Option<VoteKind>,
    action: VoteKind,
) -> (Option<VoteKind>, i64) {
    match (current, action) {
        (Some(VoteKind::Upvote), VoteKind::Upvote) => (None, -1),
        (Some(VoteKind::Downvote), VoteKind::Downvote) => (None, 1),
        (Some(VoteKind::Upvote), VoteKind::Downvote) => (Some(VoteKind::Downvote), -2),
        (Some(VoteKind::Downvote), VoteKind::Upvote) => (Some(VoteKind::Upvote), 2),
        (None, VoteKind::Upvote) => (Some(VoteKind::Upvote), 1),
        (None, VoteKind::Downvote) => (Some(VoteKind::Downvote), -1),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub upvotes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote: Option<VoteKind>,
}

pub struct VoteService<'a> {
    data: &'a DataStores,
}

impl<'a> VoteService<'a> {
    pub fn new(data: &'a DataStores) -> Self {
        Self { data }
    }

    /// Loads the caller's current vote, applies the transition, persists the
    /// vote record and the post counter, and returns the authoritative
    /// result. Concurrent voters are not reconciled.
    pub async fn cast_vote(
        &self,
        user_id: &str,
        post_id: &str,
        action: VoteKind,
    ) -> AppResult<VoteOutcome> {
        let post = self
            .data
            .posts
            .get_post_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::EntityFailIdNotFound {
                ident: post_id.to_string(),
            })?;

        let current = self.data.votes.get_vote(post_id, user_id).await?;
        let (next, delta) = tally_transition(current, action);
        let upvotes = post.upvotes + delta;

        match next {
            Some(kind) => self.data.votes.upsert_vote(post_id, user_id, kind).await?,
            None => self.data.votes.remove_vote(post_id, user_id).await?,
        }
        self.data.posts.set_upvotes(post_id, upvotes).await?;

        Ok(VoteOutcome {
            upvotes,
            vote: next,
        })
    }
}
