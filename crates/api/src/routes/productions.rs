//! Route definitions for the `/productions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::productions;
use crate::state::AppState;

/// Routes mounted at `/productions`. All of them require a session.
///
/// ```text
/// GET    /productions       -> list
/// POST   /productions       -> create
/// GET    /productions/{id}  -> get_by_id
/// PATCH  /productions/{id}  -> update
/// DELETE /productions/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/productions",
            get(productions::list).post(productions::create),
        )
        .route(
            "/productions/{id}",
            get(productions::get_by_id)
                .patch(productions::update)
                .delete(productions::delete),
        )
}
