//! Repository for the `courses` table.
//!
//! Mutating queries are owner-scoped: a course belonging to another user
//! is not found, not forbidden.

use sqlx::PgPool;

use scherzo_core::types::DbId;

use crate::models::course::{Course, CourseSummary, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, track_id, title, slug, overview, created_at";

/// Select list for [`CourseSummary`] rows (module counts included).
const SUMMARY_SELECT: &str = "SELECT c.id, c.track_id, c.title, c.slug, c.overview, \
                              c.created_at, COUNT(m.id) AS module_count \
                              FROM courses c \
                              LEFT JOIN modules m ON m.course_id = c.id";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateCourse,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (owner_id, track_id, title, slug, overview) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(owner_id)
            .bind(input.track_id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.overview)
            .fetch_one(pool)
            .await
    }

    /// Find a course by id, regardless of owner (public detail page).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a course by id, only if owned by `owner_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all courses with module counts, newest first.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<CourseSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY c.id ORDER BY c.created_at DESC");
        sqlx::query_as::<_, CourseSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// List one track's courses with module counts, newest first.
    pub async fn list_by_track(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<Vec<CourseSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE c.track_id = $1 GROUP BY c.id ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, CourseSummary>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }

    /// List the courses owned by `owner_id`, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Course>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM courses WHERE owner_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Course>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update an owned course. Only non-`None` fields are applied; the
    /// owner and creation time never change.
    ///
    /// Returns `None` when the row does not exist or is owned by someone
    /// else.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET \
                track_id = COALESCE($3, track_id), \
                title = COALESCE($4, title), \
                slug = COALESCE($5, slug), \
                overview = COALESCE($6, overview) \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(input.track_id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.overview)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owned course (modules and contents cascade).
    ///
    /// Returns `false` when the row does not exist or is owned by someone
    /// else.
    pub async fn delete_owned(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
