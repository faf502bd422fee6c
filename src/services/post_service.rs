use serde::Deserialize;
use validator::Validate;

use crate::database::DataStores;
use crate::entities::post_entity::PostType;
use crate::interfaces::repositories::posts::CreatePostData;
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::post::PostView;

#[derive(Debug, Deserialize, Validate)]
pub struct PostInput {
    #[validate(length(min = 5, message = "Min 5 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
    pub r#type: PostType,
    pub company: Option<String>,
    #[validate(length(max = 5, message = "Max 5 tags"))]
    #[serde(default)]
    pub tags: Vec<String>,
}

pub struct PostService<'a> {
    data: &'a DataStores,
}

impl<'a> PostService<'a> {
    pub fn new(data: &'a DataStores) -> Self {
        Self { data }
    }

    pub async fn get_posts(&self) -> AppResult<Vec<PostView>> {
        self.data.posts.get_posts().await
    }

    pub async fn get_post(&self, post_id: &str) -> AppResult<PostView> {
        self.data
            .posts
            .get_post_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::EntityFailIdNotFound {
                ident: post_id.to_string(),
            })
    }

    pub async fn get_posts_by_company(&self, company_name: &str) -> AppResult<Vec<PostView>> {
        self.data.posts.get_posts_by_company(company_name).await
    }

    pub async fn create_post(&self, author_id: &str, input: PostInput) -> AppResult<PostView> {
        self.data
            .posts
            .create_post(CreatePostData {
                author_id: author_id.to_string(),
                title: input.title,
                content: input.content,
                r#type: input.r#type,
                company: input.company,
                tags: input.tags,
            })
            .await
    }
}
