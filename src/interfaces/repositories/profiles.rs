use async_trait::async_trait;

use crate::middleware::error::AppResult;
use crate::models::view::user::UserView;

#[derive(Debug, Clone)]
pub struct CreateProfileData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
}

#[async_trait]
pub trait ProfilesRepositoryInterface {
    async fn get_profile_by_id(&self, profile_id: &str) -> AppResult<Option<UserView>>;
    /// Resolves the acting profile. The backend store resolves the session
    /// user id; the demo store ignores it and reads its own current-user
    /// record, falling back to a seeded default.
    async fn get_current_profile(&self, session_user_id: Option<&str>)
        -> AppResult<Option<UserView>>;
    /// Remembers the active profile where the store has such a notion
    /// (demo local store); a no-op against the backend, where identity
    /// lives in the session token only.
    async fn set_current_profile(&self, profile: &UserView) -> AppResult<()>;
    async fn clear_current_profile(&self) -> AppResult<()>;
    async fn create_profile(&self, data: CreateProfileData) -> AppResult<UserView>;
}
