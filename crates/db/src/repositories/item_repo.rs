//! Repository for the four concrete content item tables.
//!
//! One repository fronts all four tables; the kind tag picks the table.
//! Every mutating method is owner-scoped.

use sqlx::PgPool;

use scherzo_core::content::ContentKind;
use scherzo_core::types::DbId;

use crate::models::item::{FileItem, ImageItem, ItemBody, ItemPayload, NewItem, TextItem, VideoItem};

/// Base column set shared by every item table.
const BASE_COLUMNS: &str = "id, owner_id, title, created_at, updated_at";

/// (table, payload column) for a kind.
fn table_for(kind: ContentKind) -> (&'static str, &'static str) {
    match kind {
        ContentKind::Text => ("text_items", "content"),
        ContentKind::Video => ("video_items", "url"),
        ContentKind::Image => ("image_items", "file_path"),
        ContentKind::File => ("file_items", "file_path"),
    }
}

fn payload_value(body: &ItemBody) -> &str {
    match body {
        ItemBody::Text { content } => content,
        ItemBody::Video { url } => url,
        ItemBody::Image { file_path } => file_path,
        ItemBody::File { file_path } => file_path,
    }
}

/// Provides CRUD operations for concrete content items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item owned by `owner_id`, returning the created row
    /// tagged by its kind.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &NewItem,
    ) -> Result<ItemPayload, sqlx::Error> {
        let kind = input.body.kind();
        let (table, payload_column) = table_for(kind);
        let query = format!(
            "INSERT INTO {table} (owner_id, title, {payload_column}) \
             VALUES ($1, $2, $3) \
             RETURNING {BASE_COLUMNS}, {payload_column}"
        );
        let row = sqlx::query(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(payload_value(&input.body));
        Self::fetch_payload(pool, kind, row).await
    }

    /// Resolve a (kind, id) reference to its concrete row.
    pub async fn find(
        pool: &PgPool,
        kind: ContentKind,
        id: DbId,
    ) -> Result<Option<ItemPayload>, sqlx::Error> {
        let (table, payload_column) = table_for(kind);
        let query = format!(
            "SELECT {BASE_COLUMNS}, {payload_column} FROM {table} WHERE id = $1"
        );
        let row = sqlx::query(&query).bind(id);
        Self::fetch_payload_optional(pool, kind, row).await
    }

    /// Fully replace an owned item's title and payload.
    ///
    /// The table is picked from the replacement body's kind, which the
    /// caller derives from the wrapper row; a (kind, id) pair that does
    /// not exist under `owner_id` yields `None`.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        input: &NewItem,
    ) -> Result<Option<ItemPayload>, sqlx::Error> {
        let kind = input.body.kind();
        let (table, payload_column) = table_for(kind);
        let query = format!(
            "UPDATE {table} SET title = $3, {payload_column} = $4, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING {BASE_COLUMNS}, {payload_column}"
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(payload_value(&input.body));
        Self::fetch_payload_optional(pool, kind, row).await
    }

    /// Delete an owned item row. Returns `true` if a row was removed.
    pub async fn delete_owned(
        pool: &PgPool,
        kind: ContentKind,
        id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (table, _) = table_for(kind);
        let query = format!("DELETE FROM {table} WHERE id = $1 AND owner_id = $2");
        let result = sqlx::query(&query)
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_payload(
        pool: &PgPool,
        kind: ContentKind,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> Result<ItemPayload, sqlx::Error> {
        let row = query.fetch_one(pool).await?;
        Self::row_to_payload(kind, &row)
    }

    async fn fetch_payload_optional(
        pool: &PgPool,
        kind: ContentKind,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> Result<Option<ItemPayload>, sqlx::Error> {
        match query.fetch_optional(pool).await? {
            Some(row) => Ok(Some(Self::row_to_payload(kind, &row)?)),
            None => Ok(None),
        }
    }

    fn row_to_payload(
        kind: ContentKind,
        row: &sqlx::postgres::PgRow,
    ) -> Result<ItemPayload, sqlx::Error> {
        use sqlx::FromRow;
        Ok(match kind {
            ContentKind::Text => ItemPayload::Text(TextItem::from_row(row)?),
            ContentKind::Video => ItemPayload::Video(VideoItem::from_row(row)?),
            ContentKind::Image => ItemPayload::Image(ImageItem::from_row(row)?),
            ContentKind::File => ItemPayload::File(FileItem::from_row(row)?),
        })
    }
}
