use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::database::client::{Database, Db, DbConfig};
use crate::database::demo_store::LocalKvStore;
use crate::database::DataStores;
use crate::entities::company_entity::{self, Company};
use crate::middleware::error::AppResult;
use crate::middleware::mw_ctx::CtxState;
use crate::routes::{auth_routes, companies, messages, posts, referrals, users};

/// Builds the persistence facade once, from the mode flag. Everything past
/// this point is mode-agnostic.
pub async fn create_data_stores(config: &AppConfig) -> AppResult<DataStores> {
    if config.demo_mode {
        info!("->> demo mode, storage file = {}", config.demo_storage_file);
        let store = LocalKvStore::open(
            &config.demo_storage_file,
            Duration::from_millis(config.demo_latency_ms),
        )?;
        return Ok(DataStores::demo(Arc::new(store)));
    }

    let db = Database::connect(DbConfig {
        url: &config.db_url,
        database: &config.db_database,
        namespace: &config.db_namespace,
        username: config.db_username.as_deref(),
        password: config.db_password.as_deref(),
    })
    .await;
    db.run_migrations().await?;

    if config.is_development {
        create_default_companies(&db.client).await;
    }

    Ok(DataStores::surreal(&db))
}

/// Dev convenience: the bowls every fresh database starts with. The unique
/// name index makes reruns a no-op.
pub async fn create_default_companies(client: &Db) {
    let defaults = [
        ("Microsoft", "MS", 1234, 456),
        ("Google", "G", 2543, 892),
        ("Amazon", "A", 980, 234),
        ("Meta", "M", 1876, 567),
    ];

    for (name, logo, member_count, post_count) in defaults {
        let _: Result<Option<Company>, _> = client
            .create(company_entity::TABLE_NAME)
            .content(Company {
                id: None,
                name: name.to_string(),
                logo: Some(logo.to_string()),
                member_count,
                post_count,
            })
            .await;
    }
}

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/hc", get(health_check))
        .merge(auth_routes::routes())
        .merge(posts::routes())
        .merge(companies::routes())
        .merge(messages::routes())
        .merge(referrals::routes())
        .merge(users::routes())
        .with_state(ctx_state.clone())
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "ok"
}
