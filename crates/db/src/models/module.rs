//! Module entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scherzo_core::types::DbId;

/// A row from the `modules` table. Listed in `sort_order` within a course.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: String,
    pub sort_order: i32,
}

/// DTO for creating a new module.
///
/// When `sort_order` is `None`, the repository assigns the next position
/// within the course at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModule {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing module. Position changes go through the
/// reorder endpoint, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateModule {
    pub title: Option<String>,
    pub description: Option<String>,
}
