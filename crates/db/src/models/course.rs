//! Course entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scherzo_core::types::{DbId, Timestamp};

/// A row from the `courses` table.
///
/// The owner is set at creation from the authenticated caller and never
/// reassigned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub owner_id: DbId,
    pub track_id: DbId,
    pub title: String,
    pub slug: String,
    pub overview: String,
    pub created_at: Timestamp,
}

/// A course with its module count, as shown on the public catalog.
///
/// Round-trips through the catalog cache as JSON, hence `Deserialize`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: DbId,
    pub track_id: DbId,
    pub title: String,
    pub slug: String,
    pub overview: String,
    pub created_at: Timestamp,
    pub module_count: i64,
}

/// DTO for creating a new course. The owner comes from the session, not
/// the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub track_id: DbId,
    pub title: String,
    pub slug: String,
    pub overview: String,
}

/// DTO for updating an existing course. All fields optional; owner and
/// creation time are immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourse {
    pub track_id: Option<DbId>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub overview: Option<String>,
}
