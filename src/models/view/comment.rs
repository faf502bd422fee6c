use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::view::user::UserView;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub author: UserView,
    pub content: String,
    pub upvotes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
