//! Route definitions for the `/cast_members` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cast_members;
use crate::state::AppState;

/// Routes mounted at `/cast_members`. All of them require a session.
///
/// ```text
/// GET    /cast_members       -> list
/// POST   /cast_members       -> create
/// GET    /cast_members/{id}  -> get_by_id
/// PATCH  /cast_members/{id}  -> update
/// DELETE /cast_members/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/cast_members",
            get(cast_members::list).post(cast_members::create),
        )
        .route(
            "/cast_members/{id}",
            get(cast_members::get_by_id)
                .patch(cast_members::update)
                .delete(cast_members::delete),
        )
}
