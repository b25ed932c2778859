//! Route definitions for the `/pets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// Routes mounted at `/pets`. All of them require a session.
///
/// ```text
/// GET    /pets       -> list
/// POST   /pets       -> create
/// GET    /pets/{id}  -> get_by_id
/// PATCH  /pets/{id}  -> update
/// DELETE /pets/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pets", get(pets::list).post(pets::create))
        .route(
            "/pets/{id}",
            get(pets::get_by_id).patch(pets::update).delete(pets::delete),
        )
}
