#[macro_export]
macro_rules! test_with_server {
    ($name:ident, |$server:ident, $ctx_state:ident, $config:ident| $body:block) => {
        #[tokio::test(flavor = "multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use axum_test::{TestServer, TestServerConfig};
            use bowl_server::config::AppConfig;
            use bowl_server::database::client::{Database, DbConfig};
            use bowl_server::database::DataStores;
            use bowl_server::middleware::mw_ctx::create_ctx_state;

            let $config = AppConfig {
                demo_mode: false,
                demo_storage_file: "unused.json".to_string(),
                demo_latency_ms: 0,
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                jwt_secret: "secret".to_string(),
                is_development: true,
            };

            let $ctx_state = {
                let db = Database::connect(DbConfig {
                    url: &$config.db_url,
                    database: &$config.db_database,
                    namespace: &$config.db_namespace,
                    password: $config.db_password.as_deref(),
                    username: $config.db_username.as_deref(),
                })
                .await;
                db.run_migrations().await.unwrap();
                bowl_server::init::create_default_companies(&db.client).await;
                create_ctx_state(DataStores::surreal(&db), &$config)
            };

            let routes_all = bowl_server::init::main_router(&$ctx_state);

            let $server = TestServer::new_with_config(
                routes_all,
                TestServerConfig {
                    transport: None,
                    save_cookies: true,
                    expect_success_by_default: false,
                    restrict_requests_with_http_schema: false,
                    default_content_type: None,
                    default_scheme: None,
                },
            )
            .expect("Failed to create test server");

            let _ = (&$ctx_state, &$config);

            $body
        }
    };
}

#[macro_export]
macro_rules! test_with_demo_server {
    ($name:ident, |$server:ident, $store:ident| $body:block) => {
        #[tokio::test(flavor = "multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use std::sync::Arc;
            use std::time::Duration;

            use axum_test::{TestServer, TestServerConfig};
            use bowl_server::config::AppConfig;
            use bowl_server::database::demo_store::LocalKvStore;
            use bowl_server::database::DataStores;
            use bowl_server::middleware::mw_ctx::create_ctx_state;

            let config = AppConfig {
                demo_mode: true,
                demo_storage_file: "unused.json".to_string(),
                demo_latency_ms: 0,
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                jwt_secret: "secret".to_string(),
                is_development: true,
            };

            let $store: Arc<LocalKvStore> = Arc::new(LocalKvStore::in_memory(Duration::ZERO));
            let ctx_state = create_ctx_state(DataStores::demo($store.clone()), &config);
            let routes_all = bowl_server::init::main_router(&ctx_state);

            let $server = TestServer::new_with_config(
                routes_all,
                TestServerConfig {
                    transport: None,
                    save_cookies: true,
                    expect_success_by_default: false,
                    restrict_requests_with_http_schema: false,
                    default_content_type: None,
                    default_scheme: None,
                },
            )
            .expect("Failed to create test server");

            let _ = &$store;

            $body
        }
    };
}
