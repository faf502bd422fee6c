use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use chrono::Duration;

use crate::config::AppConfig;
use crate::database::DataStores;
use crate::utils::jwt::JWT;

pub struct CtxState {
    pub data: DataStores,
    pub jwt: JWT,
    pub is_development: bool,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CtxState")
    }
}

pub fn create_ctx_state(data: DataStores, config: &AppConfig) -> Arc<CtxState> {
    let ctx_state = CtxState {
        data,
        jwt: JWT::new(config.jwt_secret.clone(), Duration::days(7)),
        is_development: config.is_development,
    };
    Arc::new(ctx_state)
}

pub const JWT_KEY: &str = "jwt";
