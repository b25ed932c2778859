//! Handlers for signup, login, session check, and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use chrono::Utc;
use playbill_core::error::CoreError;
use playbill_core::types::DbId;
use playbill_db::models::session::CreateSession;
use playbill_db::models::user::CreateUser;
use playbill_db::repositories::{SessionRepo, UserRepo};
use playbill_db::transfer;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{clear_session_cookie, generate_session_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::guard::CurrentUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Create an account and log it in right away. Returns the user
/// transfer-form and sets the session cookie.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<Value>)> {
    // 1. Hash the password; plaintext is never stored.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    // 2. Create the account.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
        },
    )
    .await?;

    // 3. Issue a session for the new account.
    let jar = start_session(&state, jar, user.id).await?;

    Ok((StatusCode::CREATED, jar, Json(transfer::user(&user))))
}

/// POST /login
///
/// Authenticate with username + password. An unknown username is 404, a
/// wrong password 401.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<Value>)> {
    // 1. Find the account.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User" }))?;

    // 2. Verify the password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    // 3. Issue the session.
    let jar = start_session(&state, jar, user.id).await?;

    Ok((StatusCode::CREATED, jar, Json(transfer::user(&user))))
}

/// GET /check_session
///
/// Report who the session cookie belongs to. The extractor rejects with
/// 401 when the session does not resolve.
pub async fn check_session(user: CurrentUser) -> Json<Value> {
    Json(transfer::user(&user.user))
}

/// DELETE /logout
///
/// Delete the session row and clear the cookie. The token can never
/// authenticate again once the row is gone.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    user: CurrentUser,
) -> AppResult<(CookieJar, Json<Value>)> {
    SessionRepo::delete(&state.pool, user.session_id).await?;

    let jar = jar.remove(clear_session_cookie());
    Ok((jar, Json(json!({}))))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a session for `user_id` and return the jar with its cookie set.
async fn start_session(state: &AppState, jar: CookieJar, user_id: DbId) -> AppResult<CookieJar> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::days(state.config.session_expiry_days);

    let input = CreateSession {
        user_id,
        token_hash,
        expires_at,
    };
    SessionRepo::create(&state.pool, &input).await?;

    Ok(jar.add(session_cookie(token)))
}
