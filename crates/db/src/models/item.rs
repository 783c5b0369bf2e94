//! The four concrete content item variants.
//!
//! Each variant shares the owner/title/timestamp base shape by composition
//! and adds one payload column. [`ItemPayload`] is the tagged union a
//! resolved content reference yields.

use serde::Serialize;
use sqlx::FromRow;

use scherzo_core::content::ContentKind;
use scherzo_core::types::{DbId, Timestamp};

/// A row from `text_items`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TextItem {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `video_items`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoItem {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `image_items`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageItem {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub file_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `file_items`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FileItem {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub file_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A resolved concrete item, tagged by kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemPayload {
    Text(TextItem),
    Video(VideoItem),
    Image(ImageItem),
    File(FileItem),
}

impl ItemPayload {
    pub fn kind(&self) -> ContentKind {
        match self {
            ItemPayload::Text(_) => ContentKind::Text,
            ItemPayload::Video(_) => ContentKind::Video,
            ItemPayload::Image(_) => ContentKind::Image,
            ItemPayload::File(_) => ContentKind::File,
        }
    }

    pub fn id(&self) -> DbId {
        match self {
            ItemPayload::Text(i) => i.id,
            ItemPayload::Video(i) => i.id,
            ItemPayload::Image(i) => i.id,
            ItemPayload::File(i) => i.id,
        }
    }
}

/// Kind-specific payload of a new or replacement item.
#[derive(Debug, Clone)]
pub enum ItemBody {
    Text { content: String },
    Video { url: String },
    Image { file_path: String },
    File { file_path: String },
}

impl ItemBody {
    pub fn kind(&self) -> ContentKind {
        match self {
            ItemBody::Text { .. } => ContentKind::Text,
            ItemBody::Video { .. } => ContentKind::Video,
            ItemBody::Image { .. } => ContentKind::Image,
            ItemBody::File { .. } => ContentKind::File,
        }
    }
}

/// DTO for creating or fully replacing a concrete item. The owner comes
/// from the session, not the body.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub body: ItemBody,
}
