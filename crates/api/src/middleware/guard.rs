//! Session-cookie authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use chrono::Utc;
use playbill_core::error::CoreError;
use playbill_core::types::DbId;
use playbill_db::models::user::User;
use playbill_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that sits behind the
/// session guard; requests that do not resolve to a live session are
/// rejected with 401 before the handler body runs.
///
/// ```ignore
/// async fn guarded(user: CurrentUser) -> AppResult<Json<Value>> {
///     tracing::info!(user_id = user.user.id, "handling request");
///     Ok(Json(json!({})))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Row id of the session that authenticated this request.
    pub session_id: DbId,
    /// The resolved user row.
    pub user: User,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
            })?;

        let token_hash = hash_session_token(&token);
        let session = SessionRepo::find_by_token_hash(&state.pool, &token_hash)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid session".into())))?;

        if session.expires_at <= Utc::now() {
            // An expired row can never authenticate again; drop it now.
            SessionRepo::delete(&state.pool, session.id).await?;
            return Err(AppError::Core(CoreError::Unauthorized(
                "Session expired".into(),
            )));
        }

        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
            })?;

        Ok(CurrentUser {
            session_id: session.id,
            user,
        })
    }
}
