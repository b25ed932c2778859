//! Route definitions for the `/owners` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::owners;
use crate::state::AppState;

/// Routes mounted at `/owners`. All of them require a session.
///
/// ```text
/// GET    /owners       -> list
/// POST   /owners       -> create
/// GET    /owners/{id}  -> get_by_id
/// PATCH  /owners/{id}  -> update
/// DELETE /owners/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/owners", get(owners::list).post(owners::create))
        .route(
            "/owners/{id}",
            get(owners::get_by_id)
                .patch(owners::update)
                .delete(owners::delete),
        )
}
