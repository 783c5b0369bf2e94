//! Handlers for content authoring: per-kind item creation, in-place
//! updates, deletion, and the reorder endpoint.
//!
//! Deletion removes the concrete item row first, then the wrapper --
//! nothing cascades between the two.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use scherzo_core::content::ContentKind;
use scherzo_core::error::CoreError;
use scherzo_core::permissions::Permission;
use scherzo_core::types::DbId;
use scherzo_db::models::content::{ContentDetail, CreateContent};
use scherzo_db::models::item::{ItemBody, NewItem};
use scherzo_db::repositories::{ContentRepo, ItemRepo, ModuleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::require;
use crate::response::{DataResponse, SavedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for creating or updating a content item.
///
/// The kind decides which payload field is required: `content` for text,
/// `url` for video, `file_path` for image and file.
#[derive(Debug, Deserialize, Validate)]
pub struct ItemForm {
    #[validate(length(min = 1, max = 250, message = "Title must be 1-250 characters"))]
    pub title: String,
    pub content: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    pub url: Option<String>,
    pub file_path: Option<String>,
}

impl ItemForm {
    /// Build the kind-specific payload, rejecting forms that miss the
    /// field their kind requires.
    fn into_new_item(self, kind: ContentKind) -> Result<NewItem, AppError> {
        let missing = |field: &str| {
            AppError::Core(CoreError::Validation(format!(
                "Content of kind '{kind}' requires the '{field}' field"
            )))
        };
        let body = match kind {
            ContentKind::Text => ItemBody::Text {
                content: self.content.ok_or_else(|| missing("content"))?,
            },
            ContentKind::Video => ItemBody::Video {
                url: self.url.ok_or_else(|| missing("url"))?,
            },
            ContentKind::Image => ItemBody::Image {
                file_path: self.file_path.ok_or_else(|| missing("file_path"))?,
            },
            ContentKind::File => ItemBody::File {
                file_path: self.file_path.ok_or_else(|| missing("file_path"))?,
            },
        };
        Ok(NewItem {
            title: self.title,
            body,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/manage/modules/{module_id}/contents
///
/// The contents of an owned module in position order, items resolved.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(module_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ContentDetail>>>> {
    let module = ModuleRepo::find_owned(&state.pool, module_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: module_id,
        }))?;

    let wrappers = ContentRepo::list_by_module(&state.pool, module.id).await?;
    let mut details = Vec::with_capacity(wrappers.len());
    for wrapper in wrappers {
        let item = ItemRepo::find(&state.pool, wrapper.item_kind, wrapper.item_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Content {} references missing {} item {}",
                    wrapper.id, wrapper.item_kind, wrapper.item_id
                ))
            })?;
        details.push(ContentDetail::new(wrapper, item));
    }

    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/manage/modules/{module_id}/contents/{kind}
///
/// Create a concrete item of `kind` plus its wrapper row, appended to the
/// module. Unknown kinds fail at path deserialization.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path((module_id, kind)): Path<(DbId, ContentKind)>,
    Json(input): Json<ItemForm>,
) -> AppResult<(StatusCode, Json<ContentDetail>)> {
    require(&user, Permission::AddContent)?;
    input.validate()?;

    let module = ModuleRepo::find_owned(&state.pool, module_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id: module_id,
        }))?;

    let new_item = input.into_new_item(kind)?;
    let item = ItemRepo::create(&state.pool, user.user_id, &new_item).await?;

    let wrapper = ContentRepo::create(
        &state.pool,
        &CreateContent {
            module_id: module.id,
            item_kind: item.kind(),
            item_id: item.id(),
            sort_order: None,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ContentDetail::new(wrapper, item))))
}

/// PUT /api/v1/manage/contents/{id}
///
/// Replace the concrete item behind a wrapper row in place. The kind is
/// fixed by the wrapper; the payload field must match it.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ItemForm>,
) -> AppResult<Json<ContentDetail>> {
    require(&user, Permission::ChangeContent)?;
    input.validate()?;

    let wrapper = ContentRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }))?;

    let new_item = input.into_new_item(wrapper.item_kind)?;
    let item = ItemRepo::update_owned(&state.pool, wrapper.item_id, user.user_id, &new_item)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }))?;

    Ok(Json(ContentDetail::new(wrapper, item)))
}

/// DELETE /api/v1/manage/contents/{id}
///
/// Delete the concrete item, then its wrapper row.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require(&user, Permission::DeleteContent)?;

    let wrapper = ContentRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }))?;

    ItemRepo::delete_owned(&state.pool, wrapper.item_kind, wrapper.item_id, user.user_id).await?;
    ContentRepo::delete(&state.pool, wrapper.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/manage/contents/order
///
/// Reorder contents: the body maps content ids to positions. Rows the
/// caller does not own are skipped silently; the response is always
/// `{"saved": "OK"}`.
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<HashMap<String, i32>>,
) -> AppResult<Json<SavedResponse>> {
    require(&user, Permission::ChangeContent)?;

    for (raw_id, position) in &input {
        let id: DbId = raw_id.parse().map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Content id {raw_id:?} is not numeric"
            )))
        })?;
        ContentRepo::set_position(&state.pool, id, user.user_id, *position).await?;
    }

    Ok(Json(SavedResponse::ok()))
}
