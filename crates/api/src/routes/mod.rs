pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod manage;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /courses                                         public catalog
/// /courses/track/{track_slug}                      catalog filtered by track
/// /courses/{id}/{slug}                             course detail
///
/// /students/register                               account creation (public)
/// /students/enroll                                 self-enrollment (auth)
/// /students/courses                                enrolled courses (auth)
///
/// /manage/courses                                  list own, create
/// /manage/courses/{id}                             update, delete
/// /manage/courses/{id}/modules                     module list, batch editor
/// /manage/modules/order                            reorder modules (POST)
/// /manage/modules/{module_id}/contents             list contents
/// /manage/modules/{module_id}/contents/{kind}      create content (POST)
/// /manage/contents/order                           reorder contents (POST)
/// /manage/contents/{id}                            update, delete content
///
/// /admin/tracks                                    list, create (admin)
/// /admin/tracks/{id}                               update, delete
/// /admin/users                                     list, create (admin)
/// /admin/users/{id}                                get, update
/// /admin/users/{id}/reset-password                 reset password
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/courses", catalog::router())
        .nest("/students", students::router())
        .nest("/manage", manage::router())
        .nest("/admin", admin::router())
}
