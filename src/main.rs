use std::net::{Ipv4Addr, SocketAddr};

use bowl_server::config::AppConfig;
use bowl_server::init;
use bowl_server::middleware::error::AppResult;
use bowl_server::middleware::mw_ctx;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let data = init::create_data_stores(&config).await?;
    let ctx_state = mw_ctx::create_ctx_state(data, &config);
    let routes_all = init::main_router(&ctx_state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080));
    tracing::info!("->> LISTENING on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");

    axum::serve(listener, routes_all.into_make_service())
        .await
        .expect("server error");

    Ok(())
}
