//! Route definitions for signup, login, and session management.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Account and session routes.
///
/// ```text
/// POST   /signup         -> signup
/// POST   /login          -> login
/// GET    /check_session  -> check_session
/// DELETE /logout         -> logout (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/check_session", get(auth::check_session))
        .route("/logout", delete(auth::logout))
}
