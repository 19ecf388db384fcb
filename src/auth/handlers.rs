use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Form, Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, PublicUser, RegisterRequest, ResetPasswordRequest, TokenResponse},
        extractors::CurrentUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::ApiError,
    state::AppState,
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/token", post(login))
        .route("/auth/reset-password", post(reset_password))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::InvalidInput("invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::InvalidInput("password too short".into()));
    }

    // Friendly pre-check; under a race the unique index has the final word
    // and User::create reports the duplicate.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::DuplicateEmail);
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &payload.firstname,
        &payload.lastname,
        &payload.email,
        &hash,
        payload.is_active,
    )
    .await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(user.into()))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    // Unknown email and wrong password answer identically so callers cannot
    // probe which addresses are registered.
    let user = match User::find_by_email(&state.db, &form.username).await? {
        Some(u) => u,
        None => {
            warn!(email = %form.username, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&form.password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(&user.email)?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    if payload.new_password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::InvalidInput("password too short".into()));
    }

    // Resets by email alone; no proof of the old password is required.
    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let hash = hash_password(&payload.new_password)?;
    let user = User::update_password_hash(&state.db, user.id, &hash).await?;

    info!(user_id = user.id, email = %user.email, "password reset");
    Ok(Json(user.into()))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(user.into())
}
