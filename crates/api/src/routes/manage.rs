//! Route definitions for the authoring surface.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{manage_content, manage_course, manage_module};
use crate::state::AppState;

/// Routes mounted at `/manage`.
///
/// ```text
/// GET    /courses                              -> list_own
/// POST   /courses                              -> create
/// PUT    /courses/{id}                         -> update
/// DELETE /courses/{id}                         -> delete
/// GET    /courses/{id}/modules                 -> module list
/// PUT    /courses/{id}/modules                 -> batch module editor
///
/// POST   /modules/order                        -> reorder modules
/// GET    /modules/{module_id}/contents         -> content list
/// POST   /modules/{module_id}/contents/{kind}  -> create content
///
/// POST   /contents/order                       -> reorder contents
/// PUT    /contents/{id}                        -> update content
/// DELETE /contents/{id}                        -> delete content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(manage_course::list_own).post(manage_course::create),
        )
        .route(
            "/courses/{id}",
            put(manage_course::update).delete(manage_course::delete),
        )
        .route(
            "/courses/{id}/modules",
            get(manage_module::list).put(manage_module::batch_edit),
        )
        .route("/modules/order", post(manage_module::reorder))
        .route(
            "/modules/{module_id}/contents",
            get(manage_content::list),
        )
        .route(
            "/modules/{module_id}/contents/{kind}",
            post(manage_content::create),
        )
        .route("/contents/order", post(manage_content::reorder))
        .route(
            "/contents/{id}",
            put(manage_content::update).delete(manage_content::delete),
        )
}
