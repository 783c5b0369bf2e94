//! Handlers for the `/admin/tracks` resource.
//!
//! Tracks are the fixed top-level groupings of the catalog and only
//! administrators touch them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use scherzo_core::error::CoreError;
use scherzo_core::permissions::Permission;
use scherzo_core::slug::{slugify, validate_slug};
use scherzo_core::types::DbId;
use scherzo_db::models::track::{CreateTrack, Track, UpdateTrack};
use scherzo_db::repositories::TrackRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::require;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/tracks`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrackRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
}

/// Request body for `PUT /admin/tracks/{id}`. Slug is immutable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTrackRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/tracks
///
/// All tracks, ordered by title.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Track>>>> {
    require(&user, Permission::ManageTracks)?;
    let tracks = TrackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tracks }))
}

/// POST /api/v1/admin/tracks
///
/// Create a new track.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTrackRequest>,
) -> AppResult<(StatusCode, Json<Track>)> {
    require(&user, Permission::ManageTracks)?;
    input.validate()?;
    let slug = match input.slug {
        Some(slug) => {
            validate_slug(&slug)?;
            slug
        }
        None => slugify(&input.title)?,
    };

    let track = TrackRepo::create(
        &state.pool,
        &CreateTrack {
            title: input.title,
            slug,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(track)))
}

/// PUT /api/v1/admin/tracks/{id}
///
/// Rename a track. The slug cannot change.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrackRequest>,
) -> AppResult<Json<Track>> {
    require(&user, Permission::ManageTracks)?;
    input.validate()?;

    let track = TrackRepo::update(&state.pool, id, &UpdateTrack { title: input.title })
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;

    Ok(Json(track))
}

/// DELETE /api/v1/admin/tracks/{id}
///
/// Delete a track. Fails with 409 while courses still reference it.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require(&user, Permission::ManageTracks)?;

    let deleted = TrackRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))
    }
}
