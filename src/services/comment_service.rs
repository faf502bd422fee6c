use serde::Deserialize;
use validator::Validate;

use crate::database::DataStores;
use crate::interfaces::repositories::comments::CreateCommentData;
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::comment::CommentView;

#[derive(Debug, Deserialize, Validate)]
pub struct CommentInput {
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
    pub parent_id: Option<String>,
}

pub struct CommentService<'a> {
    data: &'a DataStores,
}

impl<'a> CommentService<'a> {
    pub fn new(data: &'a DataStores) -> Self {
        Self { data }
    }

    pub async fn get_comments(&self, post_id: &str) -> AppResult<Vec<CommentView>> {
        self.data.comments.get_comments_by_post_id(post_id).await
    }

    /// Creates the comment and bumps the post's counter. Replies stay one
    /// level deep: a parent must belong to the same post and must not itself
    /// be a reply.
    pub async fn create_comment(
        &self,
        author_id: &str,
        post_id: &str,
        input: CommentInput,
    ) -> AppResult<CommentView> {
        self.data
            .posts
            .get_post_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::EntityFailIdNotFound {
                ident: post_id.to_string(),
            })?;

        if let Some(parent_id) = &input.parent_id {
            let parent = self
                .data
                .comments
                .get_comment_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::EntityFailIdNotFound {
                    ident: parent_id.clone(),
                })?;
            if parent.post_id != post_id {
                return Err(AppError::Generic {
                    description: "parent comment belongs to another post".to_string(),
                });
            }
            if parent.parent_id.is_some() {
                return Err(AppError::Generic {
                    description: "replies cannot be nested".to_string(),
                });
            }
        }

        let comment = self
            .data
            .comments
            .create_comment(CreateCommentData {
                post_id: post_id.to_string(),
                author_id: author_id.to_string(),
                content: input.content,
                parent_id: input.parent_id,
            })
            .await?;

        self.data.posts.increase_comment_count(post_id).await?;

        Ok(comment)
    }
}
