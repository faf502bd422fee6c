use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::post_entity::PostType;
use crate::models::view::user::UserView;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub author_id: String,
    pub author: UserView,
    pub title: String,
    pub content: String,
    pub r#type: PostType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub tags: Vec<String>,
    pub upvotes: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}
