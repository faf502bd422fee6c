use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

pub const TABLE_NAME: &str = "profiles";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    pub karma_points: i64,
    pub referrals_given: i64,
    pub verified: bool,
    pub linkedin_connected: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateProfile {
    pub name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    pub karma_points: i64,
    pub referrals_given: i64,
    pub verified: bool,
    pub linkedin_connected: bool,
}
