use std::sync::Arc;

use surrealdb::engine::any::{connect, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use tracing::info;

use crate::database::repositories::comments::CommentsRepository;
use crate::database::repositories::companies::CompaniesRepository;
use crate::database::repositories::messages::MessagesRepository;
use crate::database::repositories::posts::PostsRepository;
use crate::database::repositories::profiles::ProfilesRepository;
use crate::database::repositories::votes::VotesRepository;
use crate::middleware::error::AppResult;

pub type Db = Surreal<Any>;

#[derive(Debug)]
pub struct DbConfig<'a> {
    pub url: &'a str,
    pub database: &'a str,
    pub namespace: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

#[derive(Debug)]
pub struct Database {
    pub client: Arc<Db>,
}

impl Database {
    pub async fn connect(config: DbConfig<'_>) -> Self {
        info!(
            "->> connecting DB url = {} ns = {} db = {}",
            config.url, config.namespace, config.database
        );
        let conn = connect(config.url)
            .await
            .expect("Failed to connect to SurrealDB");

        if let (Some(password), Some(username)) = (config.password, config.username) {
            conn.signin(Root { username, password })
                .await
                .expect("Failed to sign in to SurrealDB");
        }

        conn.use_ns(config.namespace)
            .use_db(config.database)
            .await
            .expect("Failed to select namespace and database");

        let version = conn
            .version()
            .await
            .expect("Failed to get SurrealDB version");

        info!("->> connected DB version: {version}");
        Self {
            client: Arc::new(conn),
        }
    }

    pub async fn run_migrations(&self) -> AppResult<()> {
        ProfilesRepository::new(self.client.clone()).mutate_db().await?;
        PostsRepository::new(self.client.clone()).mutate_db().await?;
        CommentsRepository::new(self.client.clone()).mutate_db().await?;
        CompaniesRepository::new(self.client.clone()).mutate_db().await?;
        VotesRepository::new(self.client.clone()).mutate_db().await?;
        MessagesRepository::new(self.client.clone()).mutate_db().await?;
        Ok(())
    }
}
