//! Public catalog handlers: course listing (optionally by track) and the
//! course detail page.
//!
//! Listing reads go through the catalog cache: serve the cached value when
//! present, otherwise query the store and populate the key. Nothing
//! invalidates these keys on writes; entries age out by TTL, so a listing
//! may lag the store by up to the TTL.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use scherzo_core::cache::CacheKey;
use scherzo_core::error::CoreError;
use scherzo_core::types::DbId;
use scherzo_db::models::course::{Course, CourseSummary};
use scherzo_db::models::module::Module;
use scherzo_db::models::track::TrackSummary;
use scherzo_db::repositories::{CourseRepo, ModuleRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for the course listing endpoints.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Every track with its course count.
    pub tracks: Vec<TrackSummary>,
    /// The track the listing is filtered by, if any.
    pub track: Option<TrackSummary>,
    /// Courses with module counts, newest first.
    pub courses: Vec<CourseSummary>,
}

/// Response body for the course detail endpoint.
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    pub course: Course,
    pub modules: Vec<Module>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/courses
///
/// The full catalog: all tracks and all courses.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CatalogResponse>> {
    let tracks = cached_tracks(&state).await?;

    let courses = match state.cache.get(CacheKey::AllCourses).await {
        Some(cached) => cached,
        None => {
            let fresh = CourseRepo::list_public(&state.pool).await?;
            state.cache.put(CacheKey::AllCourses, &fresh).await;
            fresh
        }
    };

    Ok(Json(CatalogResponse {
        tracks,
        track: None,
        courses,
    }))
}

/// GET /api/v1/courses/track/{track_slug}
///
/// The catalog filtered to one track. Unknown slugs are 404.
pub async fn list_by_track(
    State(state): State<AppState>,
    Path(track_slug): Path<String>,
) -> AppResult<Json<CatalogResponse>> {
    let tracks = cached_tracks(&state).await?;

    let track = TrackRepo::find_by_slug(&state.pool, &track_slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundSlug {
                entity: "Track",
                slug: track_slug.clone(),
            })
        })?;

    let courses = match state.cache.get(CacheKey::TrackCourses(track.id)).await {
        Some(cached) => cached,
        None => {
            let fresh = CourseRepo::list_by_track(&state.pool, track.id).await?;
            state.cache.put(CacheKey::TrackCourses(track.id), &fresh).await;
            fresh
        }
    };

    let track_summary = tracks.iter().find(|t| t.id == track.id).cloned();

    Ok(Json(CatalogResponse {
        tracks,
        track: track_summary,
        courses,
    }))
}

/// GET /api/v1/courses/{id}/{slug}
///
/// Course detail with its modules. The slug must match the row; a stale
/// or wrong slug is 404. Never cached.
pub async fn detail(
    State(state): State<AppState>,
    Path((id, slug)): Path<(DbId, String)>,
) -> AppResult<Json<CourseDetailResponse>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|c| c.slug == slug)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    let modules = ModuleRepo::list_by_course(&state.pool, course.id).await?;

    Ok(Json(CourseDetailResponse { course, modules }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The track list with course counts, via the `all_tracks` cache key.
async fn cached_tracks(state: &AppState) -> AppResult<Vec<TrackSummary>> {
    if let Some(cached) = state.cache.get(CacheKey::AllTracks).await {
        return Ok(cached);
    }
    let fresh = TrackRepo::list_with_counts(&state.pool).await?;
    state.cache.put(CacheKey::AllTracks, &fresh).await;
    Ok(fresh)
}
