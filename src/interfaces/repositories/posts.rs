use async_trait::async_trait;

use crate::entities::post_entity::PostType;
use crate::middleware::error::AppResult;
use crate::models::view::post::PostView;

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub r#type: PostType,
    pub company: Option<String>,
    pub tags: Vec<String>,
}

#[async_trait]
pub trait PostsRepositoryInterface {
    /// Newest first, with nested author profiles.
    async fn get_posts(&self) -> AppResult<Vec<PostView>>;
    async fn get_post_by_id(&self, post_id: &str) -> AppResult<Option<PostView>>;
    /// Exact, case-sensitive company match.
    async fn get_posts_by_company(&self, company_name: &str) -> AppResult<Vec<PostView>>;
    async fn create_post(&self, data: CreatePostData) -> AppResult<PostView>;
    async fn set_upvotes(&self, post_id: &str, upvotes: i64) -> AppResult<()>;
    /// Returns the new count.
    async fn increase_comment_count(&self, post_id: &str) -> AppResult<i64>;
}
