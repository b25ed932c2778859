//! Route registration for the HTTP surface.
//!
//! Resource routers are merged at the root rather than nested under an
//! API prefix, so the paths clients see are exactly the paths declared
//! in each module's route table.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod cast_members;
pub mod health;
pub mod owners;
pub mod pets;
pub mod productions;

/// GET / -- landing page. Not guarded.
async fn index() -> Html<&'static str> {
    Html("<h1>Playbill API</h1>")
}

/// All application routes merged into one router.
///
/// The session guard is not a layer here; guarded handlers declare a
/// [`crate::middleware::guard::CurrentUser`] parameter, and the routes
/// without one (index, signup, login, check_session, health) form the
/// allow-list.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(auth::router())
        .merge(owners::router())
        .merge(pets::router())
        .merge(productions::router())
        .merge(cast_members::router())
}
