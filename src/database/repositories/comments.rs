use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::entities::comment_entity::{Comment, CreateComment, TABLE_NAME};
use crate::entities::post_entity::TABLE_NAME as POSTS_TABLE_NAME;
use crate::entities::profile_entity::{Profile, TABLE_NAME as PROFILES_TABLE_NAME};
use crate::interfaces::repositories::comments::{CommentsRepositoryInterface, CreateCommentData};
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::string_utils::get_str_thing;
use crate::models::view::comment::CommentView;
use crate::models::view::user::UserView;

const SELECT_FIELDS: &str = "*, author_id.* AS author";

#[derive(Debug, Deserialize)]
struct CommentRow {
    id: Thing,
    post_id: Thing,
    author_id: Thing,
    author: Profile,
    content: String,
    upvotes: i64,
    parent_id: Option<Thing>,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for CommentView {
    fn from(row: CommentRow) -> Self {
        CommentView {
            id: row.id.to_raw(),
            post_id: row.post_id.to_raw(),
            author_id: row.author_id.to_raw(),
            author: UserView::from(row.author),
            content: row.content,
            upvotes: row.upvotes,
            parent_id: row.parent_id.map(|id| id.to_raw()),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug)]
pub struct CommentsRepository {
    client: Arc<Db>,
}

impl CommentsRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS post_id ON TABLE {TABLE_NAME} TYPE record<{POSTS_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS author_id ON TABLE {TABLE_NAME} TYPE record<{PROFILES_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS content ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS upvotes ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS parent_id ON TABLE {TABLE_NAME} TYPE option<record<{TABLE_NAME}>>;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    DEFINE INDEX IF NOT EXISTS comments_post_idx ON TABLE {TABLE_NAME} COLUMNS post_id;
");
        let mutation = self.client.query(sql).await?;
        mutation.check().expect("should mutate comments");

        Ok(())
    }
}

#[async_trait]
impl CommentsRepositoryInterface for CommentsRepository {
    async fn get_comments_by_post_id(&self, post_id: &str) -> AppResult<Vec<CommentView>> {
        let post = get_str_thing(post_id)?;
        let mut res = self
            .client
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM {TABLE_NAME} WHERE post_id = $post ORDER BY created_at ASC;"
            ))
            .bind(("post", post))
            .await?;
        let rows = res.take::<Vec<CommentRow>>(0)?;
        Ok(rows.into_iter().map(CommentView::from).collect())
    }

    async fn get_comment_by_id(&self, comment_id: &str) -> AppResult<Option<CommentView>> {
        let thing = match get_str_thing(comment_id) {
            Ok(thing) => thing,
            Err(_) => return Ok(None),
        };
        let mut res = self
            .client
            .query(format!("SELECT {SELECT_FIELDS} FROM <record>$id;"))
            .bind(("id", thing.to_raw()))
            .await?;
        let row = res.take::<Option<CommentRow>>(0)?;
        Ok(row.map(CommentView::from))
    }

    async fn create_comment(&self, data: CreateCommentData) -> AppResult<CommentView> {
        let post_id = get_str_thing(&data.post_id)?;
        let author_id = get_str_thing(&data.author_id)?;
        let parent_id = match &data.parent_id {
            Some(parent) => Some(get_str_thing(parent)?),
            None => None,
        };

        let created: Option<Comment> = self
            .client
            .create(TABLE_NAME)
            .content(CreateComment {
                post_id,
                author_id,
                content: data.content,
                upvotes: 0,
                parent_id,
            })
            .await?;

        let created = created.ok_or(AppError::Generic {
            description: "comment create returned no record".to_string(),
        })?;
        let id = created.id.ok_or(AppError::Generic {
            description: "comment create returned no id".to_string(),
        })?;

        self.get_comment_by_id(&id.to_raw())
            .await?
            .ok_or(AppError::EntityFailIdNotFound { ident: id.to_raw() })
    }
}
