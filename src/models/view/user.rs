use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::profile_entity::Profile;

/// Client-facing profile shape. Identical fields in both storage modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    pub karma_points: i64,
    pub referrals_given: i64,
    pub verified: bool,
    pub linkedin_connected: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for UserView {
    fn from(profile: Profile) -> Self {
        UserView {
            id: profile.id.map(|id| id.to_raw()).unwrap_or_default(),
            name: profile.name,
            email: profile.email,
            company: profile.company,
            job_title: profile.job_title,
            karma_points: profile.karma_points,
            referrals_given: profile.referrals_given,
            verified: profile.verified,
            linkedin_connected: profile.linkedin_connected,
            created_at: profile.created_at,
        }
    }
}
