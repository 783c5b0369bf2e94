//! Route definitions for the `/students` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// POST /register   -> register (public)
/// POST /enroll     -> enroll (requires auth)
/// GET  /courses    -> my_courses (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(students::register))
        .route("/enroll", post(students::enroll))
        .route("/courses", get(students::my_courses))
}
