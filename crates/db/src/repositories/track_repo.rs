//! Repository for the `tracks` table.

use sqlx::PgPool;

use scherzo_core::types::DbId;

use crate::models::track::{CreateTrack, Track, TrackSummary, UpdateTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, created_at, updated_at";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (title, slug) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a track by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE slug = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks, ordered by title.
    pub async fn list(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY title");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// List all tracks with their course counts, ordered by title.
    pub async fn list_with_counts(pool: &PgPool) -> Result<Vec<TrackSummary>, sqlx::Error> {
        sqlx::query_as::<_, TrackSummary>(
            "SELECT t.id, t.title, t.slug, COUNT(c.id) AS course_count \
             FROM tracks t \
             LEFT JOIN courses c ON c.track_id = t.id \
             GROUP BY t.id \
             ORDER BY t.title",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a track's title. Slug is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET title = COALESCE($2, title), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while courses still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
