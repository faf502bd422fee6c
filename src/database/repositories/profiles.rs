use std::sync::Arc;

use async_trait::async_trait;

use crate::database::client::Db;
use crate::entities::profile_entity::{CreateProfile, Profile, TABLE_NAME};
use crate::interfaces::repositories::profiles::{CreateProfileData, ProfilesRepositoryInterface};
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::utils::string_utils::get_str_thing;
use crate::models::view::user::UserView;

#[derive(Debug)]
pub struct ProfilesRepository {
    client: Arc<Db>,
}

impl ProfilesRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS name ON TABLE {TABLE_NAME} TYPE string ASSERT string::len(string::trim($value))>0;
    DEFINE FIELD IF NOT EXISTS email ON TABLE {TABLE_NAME} TYPE string VALUE string::lowercase($value) ASSERT string::is::email($value);
    DEFINE FIELD IF NOT EXISTS company ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS job_title ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS karma_points ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS referrals_given ON TABLE {TABLE_NAME} TYPE number DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS verified ON TABLE {TABLE_NAME} TYPE bool DEFAULT false;
    DEFINE FIELD IF NOT EXISTS linkedin_connected ON TABLE {TABLE_NAME} TYPE bool DEFAULT false;
    DEFINE FIELD IF NOT EXISTS created_at ON TABLE {TABLE_NAME} TYPE datetime DEFAULT time::now() VALUE $before OR time::now();
    DEFINE INDEX IF NOT EXISTS profiles_email_idx ON TABLE {TABLE_NAME} COLUMNS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS profiles_company_idx ON TABLE {TABLE_NAME} COLUMNS company;
");
        let mutation = self.client.query(sql).await?;
        mutation.check().expect("should mutate profiles");

        Ok(())
    }
}

#[async_trait]
impl ProfilesRepositoryInterface for ProfilesRepository {
    async fn get_profile_by_id(&self, profile_id: &str) -> AppResult<Option<UserView>> {
        let thing = get_str_thing(profile_id)?;
        let mut res = self
            .client
            .query("SELECT * FROM <record>$id;")
            .bind(("id", thing.to_raw()))
            .await?;
        let profile = res.take::<Option<Profile>>(0)?;
        Ok(profile.map(UserView::from))
    }

    async fn get_current_profile(
        &self,
        session_user_id: Option<&str>,
    ) -> AppResult<Option<UserView>> {
        match session_user_id {
            Some(profile_id) => self.get_profile_by_id(profile_id).await,
            None => Ok(None),
        }
    }

    async fn set_current_profile(&self, _profile: &UserView) -> AppResult<()> {
        // identity lives in the session token
        Ok(())
    }

    async fn clear_current_profile(&self) -> AppResult<()> {
        Ok(())
    }

    async fn create_profile(&self, data: CreateProfileData) -> AppResult<UserView> {
        let created: Option<Profile> = self
            .client
            .create(TABLE_NAME)
            .content(CreateProfile {
                name: data.name,
                email: data.email,
                company: data.company,
                job_title: data.job_title,
                karma_points: 0,
                referrals_given: 0,
                verified: false,
                linkedin_connected: false,
            })
            .await?;

        created.map(UserView::from).ok_or(AppError::Generic {
            description: "profile create returned no record".to_string(),
        })
    }
}
