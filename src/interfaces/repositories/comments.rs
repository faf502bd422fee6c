use async_trait::async_trait;

use crate::middleware::error::AppResult;
use crate::models::view::comment::CommentView;

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub parent_id: Option<String>,
}

#[async_trait]
pub trait CommentsRepositoryInterface {
    /// Oldest first.
    async fn get_comments_by_post_id(&self, post_id: &str) -> AppResult<Vec<CommentView>>;
    async fn get_comment_by_id(&self, comment_id: &str) -> AppResult<Option<CommentView>>;
    async fn create_comment(&self, data: CreateCommentData) -> AppResult<CommentView>;
}
