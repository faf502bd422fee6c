use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::models::view::post::PostView;
use crate::services::post_service::PostService;
use crate::services::referral_board::{filter_referral_posts, ReferralBoardFilter};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new().route("/api/referrals", get(get_referrals))
}

async fn get_referrals(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Query(filter): Query<ReferralBoardFilter>,
) -> CtxResult<Json<Vec<PostView>>> {
    let posts = PostService::new(&state.data)
        .get_posts()
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(filter_referral_posts(posts, &filter)))
}
