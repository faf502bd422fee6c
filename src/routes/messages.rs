use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::extractor_utils::JsonOrFormValidated;
use crate::models::view::message::{ConversationView, MessageView};
use crate::services::message_service::{MessageInput, MessageService};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/messages", get(get_messages))
        .route(
            "/api/messages/:other_user_id",
            get(get_conversation).post(send_message),
        )
        .route("/api/messages/:other_user_id/read", post(mark_read))
        .route("/api/conversations", get(get_conversations))
}

async fn get_messages(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<Vec<MessageView>>> {
    let user = state.data.current_profile(&ctx).await?;
    let messages = MessageService::new(&state.data)
        .get_messages(&user.id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(messages))
}

async fn get_conversation(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(other_user_id): Path<String>,
) -> CtxResult<Json<Vec<MessageView>>> {
    let user = state.data.current_profile(&ctx).await?;
    let messages = MessageService::new(&state.data)
        .get_conversation(&user.id, &other_user_id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(messages))
}

async fn send_message(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(other_user_id): Path<String>,
    JsonOrFormValidated(input): JsonOrFormValidated<MessageInput>,
) -> CtxResult<Json<MessageView>> {
    let user = state.data.current_profile(&ctx).await?;
    let message = MessageService::new(&state.data)
        .send_message(&user.id, &other_user_id, input)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(message))
}

async fn mark_read(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(other_user_id): Path<String>,
) -> CtxResult<()> {
    let user = state.data.current_profile(&ctx).await?;
    MessageService::new(&state.data)
        .mark_conversation_read(&user.id, &other_user_id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(())
}

async fn get_conversations(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<Vec<ConversationView>>> {
    let user = state.data.current_profile(&ctx).await?;
    let conversations = MessageService::new(&state.data)
        .get_conversations(&user.id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(conversations))
}
