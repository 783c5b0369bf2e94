//! Handlers for `/manage/courses`: the owner-side course CRUD.
//!
//! Every operation requires authentication, the matching permission, and
//! -- for update/delete -- ownership. Non-owned rows are not found.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use scherzo_core::error::CoreError;
use scherzo_core::permissions::Permission;
use scherzo_core::slug::{slugify, validate_slug};
use scherzo_core::types::DbId;
use scherzo_db::models::course::{Course, CreateCourse, UpdateCourse};
use scherzo_db::repositories::{CourseRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::require;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /manage/courses`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    pub track_id: DbId,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    #[serde(default)]
    pub overview: String,
}

/// Request body for `PUT /manage/courses/{id}`. All fields optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    pub track_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    pub slug: Option<String>,
    pub overview: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/manage/courses
///
/// The caller's own courses, newest first. No permission gate beyond
/// authentication -- a user without courses sees an empty list.
pub async fn list_own(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Course>>>> {
    let courses = CourseRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// POST /api/v1/manage/courses
///
/// Create a course owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<Course>)> {
    require(&user, Permission::AddCourse)?;
    input.validate()?;
    let slug = match input.slug {
        Some(slug) => {
            validate_slug(&slug)?;
            slug
        }
        None => slugify(&input.title)?,
    };

    // Referencing an unknown track is a request error, not a server error.
    TrackRepo::find_by_id(&state.pool, input.track_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown track id {}",
                input.track_id
            )))
        })?;

    let course = CourseRepo::create(
        &state.pool,
        user.user_id,
        &CreateCourse {
            track_id: input.track_id,
            title: input.title,
            slug,
            overview: input.overview,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /api/v1/manage/courses/{id}
///
/// Update an owned course. Owner and creation time never change.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourseRequest>,
) -> AppResult<Json<Course>> {
    require(&user, Permission::ChangeCourse)?;
    input.validate()?;
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(track_id) = input.track_id {
        TrackRepo::find_by_id(&state.pool, track_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!("Unknown track id {track_id}")))
            })?;
    }

    let course = CourseRepo::update_owned(
        &state.pool,
        id,
        user.user_id,
        &UpdateCourse {
            track_id: input.track_id,
            title: input.title,
            slug: input.slug,
            overview: input.overview,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Course",
        id,
    }))?;

    Ok(Json(course))
}

/// DELETE /api/v1/manage/courses/{id}
///
/// Delete an owned course. Modules and contents cascade; their items stay.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require(&user, Permission::DeleteCourse)?;

    let deleted = CourseRepo::delete_owned(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
    }
}
