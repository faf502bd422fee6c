use std::sync::Arc;

use crate::interfaces::repositories::comments::CommentsRepositoryInterface;
use crate::interfaces::repositories::companies::CompaniesRepositoryInterface;
use crate::interfaces::repositories::messages::MessagesRepositoryInterface;
use crate::interfaces::repositories::posts::PostsRepositoryInterface;
use crate::interfaces::repositories::profiles::ProfilesRepositoryInterface;
use crate::interfaces::repositories::votes::VotesRepositoryInterface;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError, CtxResult};
use crate::models::view::user::UserView;

pub mod client;
pub mod demo;
pub mod demo_store;
pub mod repositories;

use client::Database;
use demo_store::LocalKvStore;

/// The persistence facade. One repository per entity family; which
/// implementation sits behind each field is decided once at startup, so no
/// call site ever inspects the storage mode.
pub struct DataStores {
    pub profiles: Arc<dyn ProfilesRepositoryInterface + Send + Sync>,
    pub posts: Arc<dyn PostsRepositoryInterface + Send + Sync>,
    pub comments: Arc<dyn CommentsRepositoryInterface + Send + Sync>,
    pub companies: Arc<dyn CompaniesRepositoryInterface + Send + Sync>,
    pub votes: Arc<dyn VotesRepositoryInterface + Send + Sync>,
    pub messages: Arc<dyn MessagesRepositoryInterface + Send + Sync>,
}

impl DataStores {
    pub fn surreal(database: &Database) -> Self {
        let client = database.client.clone();
        Self {
            profiles: Arc::new(repositories::profiles::ProfilesRepository::new(
                client.clone(),
            )),
            posts: Arc::new(repositories::posts::PostsRepository::new(client.clone())),
            comments: Arc::new(repositories::comments::CommentsRepository::new(
                client.clone(),
            )),
            companies: Arc::new(repositories::companies::CompaniesRepository::new(
                client.clone(),
            )),
            votes: Arc::new(repositories::votes::VotesRepository::new(client.clone())),
            messages: Arc::new(repositories::messages::MessagesRepository::new(client)),
        }
    }

    pub fn demo(store: Arc<LocalKvStore>) -> Self {
        Self {
            profiles: Arc::new(demo::profiles::DemoProfilesRepository::new(store.clone())),
            posts: Arc::new(demo::posts::DemoPostsRepository::new(store.clone())),
            comments: Arc::new(demo::comments::DemoCommentsRepository::new(store.clone())),
            companies: Arc::new(demo::companies::DemoCompaniesRepository::new(store.clone())),
            votes: Arc::new(demo::votes::DemoVotesRepository::new(store.clone())),
            messages: Arc::new(demo::messages::DemoMessagesRepository::new(store)),
        }
    }

    /// The profile acting in this request: the session user against the
    /// backend store, the demo store's own current-user record otherwise.
    pub async fn current_profile(&self, ctx: &Ctx) -> CtxResult<UserView> {
        let session_user_id = ctx.user_id().ok();
        self.profiles
            .get_current_profile(session_user_id.as_deref())
            .await
            .map_err(CtxError::from(ctx))?
            .ok_or_else(|| ctx.to_ctx_error(AppError::AuthFailNoJwtCookie))
    }
}
