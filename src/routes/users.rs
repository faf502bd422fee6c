use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::models::view::user::UserView;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new().route("/api/users/current", get(get_current_user))
}

async fn get_current_user(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<UserView>> {
    let user = state.data.current_profile(&ctx).await?;
    Ok(Json(user))
}
