//! Content wrapper model and DTOs.
//!
//! A content row ties a module to exactly one concrete item through a
//! (kind, id) reference. The reference carries no foreign key; resolution
//! and deletion of the item are explicit.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scherzo_core::content::ContentKind;
use scherzo_core::types::DbId;

use crate::models::item::ItemPayload;

/// A row from the `contents` table. Listed in `sort_order` within a module.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Content {
    pub id: DbId,
    pub module_id: DbId,
    pub item_kind: ContentKind,
    pub item_id: DbId,
    pub sort_order: i32,
}

/// A wrapper row together with its resolved item.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDetail {
    pub id: DbId,
    pub module_id: DbId,
    pub sort_order: i32,
    pub item: ItemPayload,
}

impl ContentDetail {
    pub fn new(content: Content, item: ItemPayload) -> Self {
        Self {
            id: content.id,
            module_id: content.module_id,
            sort_order: content.sort_order,
            item,
        }
    }
}

/// DTO for creating a content wrapper row.
///
/// When `sort_order` is `None`, the repository assigns the next position
/// within the module at insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContent {
    pub module_id: DbId,
    pub item_kind: ContentKind,
    pub item_id: DbId,
    pub sort_order: Option<i32>,
}
