//! Repository for the `modules` table.
//!
//! Ownership is transitive through the owning course; owner-scoped
//! queries join `courses` and treat a mismatch as not-found.

use sqlx::PgPool;

use scherzo_core::types::DbId;

use crate::models::module::{CreateModule, Module, UpdateModule};
use crate::ordering;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, title, description, sort_order";

/// Same columns qualified for joined queries.
const JOINED_COLUMNS: &str = "m.id, m.course_id, m.title, m.description, m.sort_order";

/// Provides CRUD operations for modules.
pub struct ModuleRepo;

impl ModuleRepo {
    /// Insert a new module into `course_id`, returning the created row.
    ///
    /// When the DTO carries no `sort_order`, the next position within the
    /// course is assigned; an explicit value passes through unchanged.
    pub async fn create(
        pool: &PgPool,
        course_id: DbId,
        input: &CreateModule,
    ) -> Result<Module, sqlx::Error> {
        let sort_order = match input.sort_order {
            Some(explicit) => explicit,
            None => ordering::next_in_scope(pool, "modules", "course_id", course_id).await?,
        };
        let query = format!(
            "INSERT INTO modules (course_id, title, description, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// List a course's modules in position order.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<Module>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM modules WHERE course_id = $1 ORDER BY sort_order");
        sqlx::query_as::<_, Module>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Find a module by id, only if its course is owned by `owner_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Module>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM modules m \
             JOIN courses c ON c.id = m.course_id \
             WHERE m.id = $1 AND c.owner_id = $2"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Update an owned module's title/description. Position is untouched;
    /// reordering goes through [`ModuleRepo::set_position`].
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &UpdateModule,
    ) -> Result<Option<Module>, sqlx::Error> {
        let query = format!(
            "UPDATE modules m SET \
                title = COALESCE($3, m.title), \
                description = COALESCE($4, m.description) \
             FROM courses c \
             WHERE m.id = $1 AND m.course_id = c.id AND c.owner_id = $2 \
             RETURNING {JOINED_COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owned module (its contents cascade; their items do not).
    pub async fn delete_owned(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM modules m \
             USING courses c \
             WHERE m.id = $1 AND m.course_id = c.id AND c.owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set an owned module's position. Rows the caller does not own are
    /// silently skipped; returns `true` when a row was updated.
    pub async fn set_position(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        position: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE modules m SET sort_order = $3 \
             FROM courses c \
             WHERE m.id = $1 AND m.course_id = c.id AND c.owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .bind(position)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
