//! Scoped auto-order computation.
//!
//! Modules order within their course; contents order within their module.
//! When a row is inserted without an explicit position, the repository asks
//! this helper for the next one. Explicit positions always pass through
//! untouched, and a row's position is never recomputed on update.

use sqlx::PgPool;

use scherzo_core::types::DbId;

/// Next position within one scope: `max(sort_order) + 1`, or `0` when the
/// scope holds no rows.
///
/// `table` and `group_column` are repository-owned constants, never user
/// input. The read and the subsequent insert are not atomic -- two
/// concurrent unordered inserts into the same scope can be assigned the
/// same position.
pub async fn next_in_scope(
    pool: &PgPool,
    table: &str,
    group_column: &str,
    group_id: DbId,
) -> Result<i32, sqlx::Error> {
    let query =
        format!("SELECT COALESCE(MAX(sort_order) + 1, 0) FROM {table} WHERE {group_column} = $1");
    sqlx::query_scalar::<_, i32>(&query)
        .bind(group_id)
        .fetch_one(pool)
        .await
}
