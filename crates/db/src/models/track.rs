//! Track entity model and DTOs.
//!
//! Tracks are the top-level subject/difficulty groupings of the catalog,
//! managed only through the admin surface.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scherzo_core::types::{DbId, Timestamp};

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A track with its course count, as shown on the public catalog.
///
/// `Deserialize` as well as `Serialize`: these round-trip through the
/// catalog cache as JSON.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub course_count: i64,
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub title: String,
    pub slug: String,
}

/// DTO for updating an existing track. Slug is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrack {
    pub title: Option<String>,
}
