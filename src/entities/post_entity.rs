use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

pub const TABLE_NAME: &str = "posts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    #[serde(rename = "general")]
    General,
    #[serde(rename = "referral-offer")]
    ReferralOffer,
    #[serde(rename = "referral-request")]
    ReferralRequest,
}

impl PostType {
    pub fn is_referral(&self) -> bool {
        matches!(self, PostType::ReferralOffer | PostType::ReferralRequest)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Post {
    // id is ULID for sorting by time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub author_id: Thing,
    pub title: String,
    pub content: String,
    pub r#type: PostType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub tags: Vec<String>,
    pub upvotes: i64,
    pub comment_count: i64,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreatePost {
    pub id: Thing,
    pub author_id: Thing,
    pub title: String,
    pub content: String,
    pub r#type: PostType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub tags: Vec<String>,
}

pub fn get_new_post_thing() -> Thing {
    // id is ULID for sorting by time
    Thing::from((TABLE_NAME.to_string(), Id::ulid()))
}
