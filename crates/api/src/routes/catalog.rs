//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET /                      -> list (all tracks + all courses)
/// GET /track/{track_slug}    -> list_by_track
/// GET /{id}/{slug}           -> detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list))
        .route("/track/{track_slug}", get(catalog::list_by_track))
        .route("/{id}/{slug}", get(catalog::detail))
}
