use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use surrealdb::opt::PatchOp;
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::entities::post_entity::{get_new_post_thing, CreatePost, Post, PostType, TABLE_NAME};
use crate::entities::profile_entity::{Profile, TABLE_NAME as PROFILES_TABLE_NAME};
use crate::interfaces::repositories::posts::{CreatePostData, PostsRepositoryInterface};
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::string_utils::get_str_thing;
use crate::models::view::post::PostView;
use crate::models::view::user::UserView;

// author join used by every fetch
const SELECT_FIELDS: &str = "*, author_id.* AS author";

#[derive(Debug, Deserialize)]
struct PostRow {
    id: Thing,
    author_id: Thing,
    author: Profile,
    title: String,
    content: String,
    r#type: PostType,
    company: Option<String>,
    tags: Vec<String>,
    upvotes: i64,
    comment_count: i64,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for PostView {
    fn from(row: PostRow) -> Self {
        PostView {
            id: row.id.to_raw(),
            author_id: row.author_id.to_raw(),
            author: UserView::from(row.author),
            title: row.title,
            content: row.content,
            r#type: row.r#type,
            company: row.company,
            tags: row.tags,
            upvotes: row.upvotes,
            comment_count: row.comment_count,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug)]
pub struct PostsRepository {
    client: Arc<Db>,
}

impl PostsRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS author_id ON TABLE {TABLE_NAME} TYPE record<{PROFILES_TABLE_NAME}>;
    DEFINE FIELD IF NOT EXISTS title ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS content ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS type ON TABLE {TABLE_NAME} TYPE string ASSERT $value IN ['general', 'referral-offer', 'referral-request'];
    DEFINE FIELD IF NOT EXISTS company ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS tags ON TABLE {TABLE_NAME} TYPE array<string> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS upvotes ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS comment_count ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    DEFINE INDEX IF NOT EXISTS posts_author_idx ON TABLE {TABLE_NAME} COLUMNS author_id;
    DEFINE INDEX IF NOT EXISTS posts_company_idx ON TABLE {TABLE_NAME} COLUMNS company;
    DEFINE INDEX IF NOT EXISTS posts_type_idx ON TABLE {TABLE_NAME} COLUMNS type;
");
        let mutation = self.client.query(sql).await?;
        mutation.check().expect("should mutate posts");

        Ok(())
    }
}

#[async_trait]
impl PostsRepositoryInterface for PostsRepository {
    async fn get_posts(&self) -> AppResult<Vec<PostView>> {
        let mut res = self
            .client
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM {TABLE_NAME} ORDER BY created_at DESC;"
            ))
            .await?;
        let rows = res.take::<Vec<PostRow>>(0)?;
        Ok(rows.into_iter().map(PostView::from).collect())
    }

    async fn get_post_by_id(&self, post_id: &str) -> AppResult<Option<PostView>> {
        let thing = match get_str_thing(post_id) {
            Ok(thing) => thing,
            Err(_) => return Ok(None),
        };
        let mut res = self
            .client
            .query(format!("SELECT {SELECT_FIELDS} FROM <record>$id;"))
            .bind(("id", thing.to_raw()))
            .await?;
        let row = res.take::<Option<PostRow>>(0)?;
        Ok(row.map(PostView::from))
    }

    async fn get_posts_by_company(&self, company_name: &str) -> AppResult<Vec<PostView>> {
        let mut res = self
            .client
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM {TABLE_NAME} WHERE company = $company ORDER BY created_at DESC;"
            ))
            .bind(("company", company_name.to_string()))
            .await?;
        let rows = res.take::<Vec<PostRow>>(0)?;
        Ok(rows.into_iter().map(PostView::from).collect())
    }

    async fn create_post(&self, data: CreatePostData) -> AppResult<PostView> {
        let author_id = get_str_thing(&data.author_id)?;
        let id = get_new_post_thing();

        let _created: Option<Post> = self
            .client
            .create(TABLE_NAME)
            .content(CreatePost {
                id: id.clone(),
                author_id,
                title: data.title,
                content: data.content,
                r#type: data.r#type,
                company: data.company,
                tags: data.tags,
            })
            .await?;

        self.get_post_by_id(&id.to_raw())
            .await?
            .ok_or(AppError::Generic {
                description: "post create returned no record".to_string(),
            })
    }

    async fn set_upvotes(&self, post_id: &str, upvotes: i64) -> AppResult<()> {
        let thing = get_str_thing(post_id)?;
        let res: Option<Post> = self
            .client
            .update((thing.tb.clone(), thing.id.to_raw()))
            .patch(PatchOp::replace("/upvotes", upvotes))
            .await?;
        res.ok_or(AppError::EntityFailIdNotFound {
            ident: post_id.to_string(),
        })?;
        Ok(())
    }

    async fn increase_comment_count(&self, post_id: &str) -> AppResult<i64> {
        let thing = get_str_thing(post_id)?;
        let curr_nr = self
            .client
            .query("SELECT comment_count FROM <record>$rec;")
            .bind(("rec", thing.to_raw()))
            .await?
            .take::<Option<i64>>("comment_count")?
            .ok_or(AppError::EntityFailIdNotFound {
                ident: post_id.to_string(),
            })?;

        let res: Option<Post> = self
            .client
            .update((thing.tb.clone(), thing.id.to_raw()))
            .patch(PatchOp::replace("/comment_count", curr_nr + 1))
            .await?;
        res.ok_or(AppError::EntityFailIdNotFound {
            ident: post_id.to_string(),
        })?;
        Ok(curr_nr + 1)
    }
}
