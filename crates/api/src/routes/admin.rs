//! Route definitions for the administrative surface.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, tracks};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /tracks                     -> list
/// POST   /tracks                     -> create
/// PUT    /tracks/{id}                -> update
/// DELETE /tracks/{id}                -> delete
///
/// GET    /users                      -> list_users
/// POST   /users                      -> create_user
/// GET    /users/{id}                 -> get_user
/// PUT    /users/{id}                 -> update_user
/// POST   /users/{id}/reset-password  -> reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tracks", get(tracks::list).post(tracks::create))
        .route("/tracks/{id}", put(tracks::update).delete(tracks::delete))
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/users/{id}", get(admin::get_user).put(admin::update_user))
        .route("/users/{id}/reset-password", post(admin::reset_password))
}
