//! Repository for the `contents` table (wrapper rows).
//!
//! A wrapper's (item_kind, item_id) reference is resolved through
//! [`crate::repositories::ItemRepo`]; deleting a wrapper never touches
//! the item row.

use sqlx::PgPool;

use scherzo_core::types::DbId;

use crate::models::content::{Content, CreateContent};
use crate::ordering;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, module_id, item_kind, item_id, sort_order";

/// Same columns qualified for joined queries.
const JOINED_COLUMNS: &str = "ct.id, ct.module_id, ct.item_kind, ct.item_id, ct.sort_order";

/// Provides CRUD operations for content wrapper rows.
pub struct ContentRepo;

impl ContentRepo {
    /// Insert a wrapper row, returning it.
    ///
    /// When the DTO carries no `sort_order`, the next position within the
    /// module is assigned; an explicit value passes through unchanged.
    pub async fn create(pool: &PgPool, input: &CreateContent) -> Result<Content, sqlx::Error> {
        let sort_order = match input.sort_order {
            Some(explicit) => explicit,
            None => ordering::next_in_scope(pool, "contents", "module_id", input.module_id).await?,
        };
        let query = format!(
            "INSERT INTO contents (module_id, item_kind, item_id, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(input.module_id)
            .bind(input.item_kind)
            .bind(input.item_id)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// List a module's wrapper rows in position order.
    pub async fn list_by_module(
        pool: &PgPool,
        module_id: DbId,
    ) -> Result<Vec<Content>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM contents WHERE module_id = $1 ORDER BY sort_order");
        sqlx::query_as::<_, Content>(&query)
            .bind(module_id)
            .fetch_all(pool)
            .await
    }

    /// Find a wrapper row by id, only if its course is owned by `owner_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Content>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM contents ct \
             JOIN modules m ON m.id = ct.module_id \
             JOIN courses c ON c.id = m.course_id \
             WHERE ct.id = $1 AND c.owner_id = $2"
        );
        sqlx::query_as::<_, Content>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a wrapper row by id. The referenced item is the caller's
    /// responsibility and must already be gone or explicitly kept.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set an owned wrapper row's position. Rows the caller does not own
    /// are silently skipped; returns `true` when a row was updated.
    pub async fn set_position(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        position: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE contents ct SET sort_order = $3 \
             FROM modules m, courses c \
             WHERE ct.id = $1 AND ct.module_id = m.id AND m.course_id = c.id \
               AND c.owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .bind(position)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
