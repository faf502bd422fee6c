use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::entities::vote_entity::VoteKind;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::extractor_utils::JsonOrFormValidated;
use crate::models::view::comment::CommentView;
use crate::models::view::post::PostView;
use crate::services::comment_service::{CommentInput, CommentService};
use crate::services::post_service::{PostInput, PostService};
use crate::services::vote_service::{VoteOutcome, VoteService};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/posts", get(get_posts).post(create_post))
        .route("/api/posts/:post_id", get(get_post))
        .route("/api/posts/:post_id/upvote", post(upvote))
        .route("/api/posts/:post_id/downvote", post(downvote))
        .route(
            "/api/posts/:post_id/comments",
            get(get_comments).post(create_comment),
        )
}

async fn get_posts(State(state): State<Arc<CtxState>>, ctx: Ctx) -> CtxResult<Json<Vec<PostView>>> {
    let posts = PostService::new(&state.data)
        .get_posts()
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(posts))
}

async fn get_post(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(post_id): Path<String>,
) -> CtxResult<Json<PostView>> {
    let post = PostService::new(&state.data)
        .get_post(&post_id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(post))
}

async fn create_post(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    JsonOrFormValidated(input): JsonOrFormValidated<PostInput>,
) -> CtxResult<Json<PostView>> {
    let author = state.data.current_profile(&ctx).await?;
    let post = PostService::new(&state.data)
        .create_post(&author.id, input)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(post))
}

async fn upvote(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(post_id): Path<String>,
) -> CtxResult<Json<VoteOutcome>> {
    cast_vote(state, ctx, post_id, VoteKind::Upvote).await
}

async fn downvote(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(post_id): Path<String>,
) -> CtxResult<Json<VoteOutcome>> {
    cast_vote(state, ctx, post_id, VoteKind::Downvote).await
}

async fn cast_vote(
    state: Arc<CtxState>,
    ctx: Ctx,
    post_id: String,
    action: VoteKind,
) -> CtxResult<Json<VoteOutcome>> {
    let user = state.data.current_profile(&ctx).await?;
    let outcome = VoteService::new(&state.data)
        .cast_vote(&user.id, &post_id, action)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(outcome))
}

async fn get_comments(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(post_id): Path<String>,
) -> CtxResult<Json<Vec<CommentView>>> {
    let comments = CommentService::new(&state.data)
        .get_comments(&post_id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(comments))
}

async fn create_comment(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(post_id): Path<String>,
    JsonOrFormValidated(input): JsonOrFormValidated<CommentInput>,
) -> CtxResult<Json<CommentView>> {
    let author = state.data.current_profile(&ctx).await?;
    let comment = CommentService::new(&state.data)
        .create_comment(&author.id, &post_id, input)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(comment))
}
