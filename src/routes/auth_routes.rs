use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tower_cookies::{Cookie, Cookies};
use validator::Validate;

use crate::interfaces::repositories::profiles::CreateProfileData;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxResult};
use crate::middleware::mw_ctx::{CtxState, JWT_KEY};
use crate::middleware::utils::extractor_utils::JsonOrFormValidated;
use crate::models::view::user::UserView;

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupInput {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "Job title cannot be empty"))]
    pub job_title: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "Profile id cannot be empty"))]
    pub profile_id: String,
}

async fn signup(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    JsonOrFormValidated(input): JsonOrFormValidated<SignupInput>,
) -> CtxResult<Json<UserView>> {
    let profile = state
        .data
        .profiles
        .create_profile(CreateProfileData {
            name: input.name,
            email: input.email,
            company: input.company,
            job_title: input.job_title,
        })
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;

    Ok(Json(profile))
}

async fn login(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    cookies: Cookies,
    JsonOrFormValidated(input): JsonOrFormValidated<LoginInput>,
) -> CtxResult<Json<UserView>> {
    let profile = state
        .data
        .profiles
        .get_profile_by_id(&input.profile_id)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?
        .ok_or_else(|| {
            ctx.to_ctx_error(AppError::EntityFailIdNotFound {
                ident: input.profile_id.clone(),
            })
        })?;

    let token = state
        .jwt
        .create_by_login(&profile.id)
        .map_err(|err| ctx.to_ctx_error(AppError::Generic { description: err }))?;

    let mut cookie = Cookie::new(JWT_KEY, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);

    state
        .data
        .profiles
        .set_current_profile(&profile)
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;

    Ok(Json(profile))
}

async fn logout(
    State(state): State<Arc<CtxState>>,
    ctx: Ctx,
    cookies: Cookies,
) -> CtxResult<()> {
    let mut cookie = Cookie::new(JWT_KEY, "");
    cookie.set_path("/");
    cookies.remove(cookie);

    state
        .data
        .profiles
        .clear_current_profile()
        .await
        .map_err(|e| ctx.to_ctx_error(e))?;

    Ok(())
}
