use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::database::demo::{random_id, resolve_profile, seed};
use crate::database::demo_store::{LocalKvStore, KEY_USER_COMMENTS};
use crate::interfaces::repositories::comments::{CommentsRepositoryInterface, CreateCommentData};
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::comment::CommentView;

pub struct DemoCommentsRepository {
    store: Arc<LocalKvStore>,
}

impl DemoCommentsRepository {
    pub fn new(store: Arc<LocalKvStore>) -> Self {
        Self { store }
    }

    fn user_comments(&self) -> AppResult<Vec<CommentView>> {
        Ok(self
            .store
            .get_item::<Vec<CommentView>>(KEY_USER_COMMENTS)?
            .unwrap_or_default())
    }
}

#[async_trait]
impl CommentsRepositoryInterface for DemoCommentsRepository {
    async fn get_comments_by_post_id(&self, post_id: &str) -> AppResult<Vec<CommentView>> {
        self.store.simulate_latency().await;
        // fixtures first, then user comments: both already ascend by age
        let mut comments: Vec<CommentView> = seed::comments()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.extend(
            self.user_comments()?
                .into_iter()
                .filter(|c| c.post_id == post_id),
        );
        Ok(comments)
    }

    async fn get_comment_by_id(&self, comment_id: &str) -> AppResult<Option<CommentView>> {
        self.store.simulate_latency().await;
        if let Some(comment) = seed::comments().iter().find(|c| c.id == comment_id) {
            return Ok(Some(comment.clone()));
        }
        Ok(self
            .user_comments()?
            .into_iter()
            .find(|c| c.id == comment_id))
    }

    async fn create_comment(&self, data: CreateCommentData) -> AppResult<CommentView> {
        self.store.simulate_latency().await;
        let author = resolve_profile(&self.store, &data.author_id)?.ok_or_else(|| {
            AppError::EntityFailIdNotFound {
                ident: data.author_id.clone(),
            }
        })?;

        let comment = CommentView {
            id: random_id(),
            post_id: data.post_id,
            author_id: author.id.clone(),
            author,
            content: data.content,
            upvotes: 0,
            parent_id: data.parent_id,
            created_at: Utc::now(),
        };

        let mut comments = self.user_comments()?;
        comments.push(comment.clone());
        self.store.set_item(KEY_USER_COMMENTS, &comments)?;

        Ok(comment)
    }
}
