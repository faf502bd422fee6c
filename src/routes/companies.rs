use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxResult};
use crate::middleware::mw_ctx::CtxState;
use crate::models::view::company::CompanyView;
use crate::models::view::post::PostView;
use crate::services::post_service::PostService;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/companies", get(get_companies))
        .route("/api/companies/:company_id", get(get_company))
        .route("/api/companies/:company_id/posts", get(get_company_posts))
}

async fn get_companies(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
) -> CtxResult<Json<Vec<CompanyView>>> {
    let companies = state
        .data
        .companies
        .get_companies()
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(companies))
}

async fn get_company(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(company_id): Path<String>,
) -> CtxResult<Json<CompanyView>> {
    let company = state
        .data
        .companies
        .get_company_by_id(&company_id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?
        .ok_or_else(|| ctx.to_ctx_error(AppError::EntityFailIdNotFound { ident: company_id }))?;
    Ok(Json(company))
}

/// The company bowl feed: posts whose company field equals the bowl's name.
async fn get_company_posts(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(company_id): Path<String>,
) -> CtxResult<Json<Vec<PostView>>> {
    let company = state
        .data
        .companies
        .get_company_by_id(&company_id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?
        .ok_or_else(|| ctx.to_ctx_error(AppError::EntityFailIdNotFound { ident: company_id }))?;

    let posts = PostService::new(&state.data)
        .get_posts_by_company(&company.name)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;
    Ok(Json(posts))
}
