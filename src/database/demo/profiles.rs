use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::database::demo::{random_id, resolve_profile, seed};
use crate::database::demo_store::{LocalKvStore, KEY_CURRENT_USER, KEY_PENDING_USER};
use crate::interfaces::repositories::profiles::{CreateProfileData, ProfilesRepositoryInterface};
use crate::middleware::error::AppResult;
use crate::models::view::user::UserView;

pub struct DemoProfilesRepository {
    store: Arc<LocalKvStore>,
}

impl DemoProfilesRepository {
    pub fn new(store: Arc<LocalKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfilesRepositoryInterface for DemoProfilesRepository {
    async fn get_profile_by_id(&self, profile_id: &str) -> AppResult<Option<UserView>> {
        self.store.simulate_latency().await;
        resolve_profile(&self.store, profile_id)
    }

    async fn get_current_profile(
        &self,
        _session_user_id: Option<&str>,
    ) -> AppResult<Option<UserView>> {
        self.store.simulate_latency().await;
        match self.store.get_item::<UserView>(KEY_CURRENT_USER)? {
            Some(current) => Ok(Some(current)),
            None => Ok(Some(seed::default_profile().clone())),
        }
    }

    async fn set_current_profile(&self, profile: &UserView) -> AppResult<()> {
        self.store.simulate_latency().await;
        self.store.set_item(KEY_CURRENT_USER, profile)
    }

    async fn clear_current_profile(&self) -> AppResult<()> {
        self.store.simulate_latency().await;
        self.store.remove_item(KEY_CURRENT_USER)
    }

    async fn create_profile(&self, data: CreateProfileData) -> AppResult<UserView> {
        self.store.simulate_latency().await;
        let profile = UserView {
            id: random_id(),
            name: data.name,
            email: data.email,
            company: data.company,
            job_title: data.job_title,
            karma_points: 0,
            referrals_given: 0,
            verified: false,
            linkedin_connected: false,
            created_at: Utc::now(),
        };
        self.store.set_item(KEY_PENDING_USER, &profile)?;
        Ok(profile)
    }
}
