//! Handlers for module authoring: the batch module editor and the
//! drag-and-drop reorder endpoint.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use scherzo_core::error::CoreError;
use scherzo_core::permissions::Permission;
use scherzo_core::types::DbId;
use scherzo_db::models::module::{CreateModule, Module, UpdateModule};
use scherzo_db::repositories::{CourseRepo, ModuleRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::require;
use crate::response::{DataResponse, SavedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// One row of the batch module editor.
///
/// - `id` absent: insert a new module (auto-positioned at the end).
/// - `id` present: update that module's title/description.
/// - `id` present + `delete: true`: remove that module.
#[derive(Debug, Deserialize)]
pub struct ModuleFormRow {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub delete: bool,
}

/// Request body for `PUT /manage/courses/{id}/modules`.
#[derive(Debug, Deserialize)]
pub struct ModuleBatchRequest {
    pub modules: Vec<ModuleFormRow>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/manage/courses/{id}/modules
///
/// The modules of an owned course, in position order.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Module>>>> {
    let course = CourseRepo::find_owned(&state.pool, course_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    let modules = ModuleRepo::list_by_course(&state.pool, course.id).await?;
    Ok(Json(DataResponse { data: modules }))
}

/// PUT /api/v1/manage/courses/{id}/modules
///
/// Batch module editor. Applies every row of the request against the
/// owned course, then returns the resulting module list. Each row kind is
/// checked against its own permission.
pub async fn batch_edit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<DbId>,
    Json(input): Json<ModuleBatchRequest>,
) -> AppResult<Json<DataResponse<Vec<Module>>>> {
    let course = CourseRepo::find_owned(&state.pool, course_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    for row in &input.modules {
        match (row.id, row.delete) {
            // Delete an existing module.
            (Some(id), true) => {
                require(&user, Permission::DeleteModule)?;
                let module = owned_module_in_course(&state, &user, id, course.id).await?;
                ModuleRepo::delete_owned(&state.pool, module.id, user.user_id).await?;
            }
            // Update an existing module.
            (Some(id), false) => {
                require(&user, Permission::ChangeModule)?;
                owned_module_in_course(&state, &user, id, course.id).await?;
                ModuleRepo::update_owned(
                    &state.pool,
                    id,
                    user.user_id,
                    &UpdateModule {
                        title: row.title.clone(),
                        description: row.description.clone(),
                    },
                )
                .await?;
            }
            // A delete flag without an id is meaningless.
            (None, true) => {
                return Err(AppError::Core(CoreError::Validation(
                    "Cannot delete a module row without an id".into(),
                )));
            }
            // Insert a new module at the end of the course.
            (None, false) => {
                require(&user, Permission::AddModule)?;
                let title = row.title.clone().filter(|t| !t.is_empty()).ok_or_else(|| {
                    AppError::Core(CoreError::Validation(
                        "New module rows require a title".into(),
                    ))
                })?;
                ModuleRepo::create(
                    &state.pool,
                    course.id,
                    &CreateModule {
                        title,
                        description: row.description.clone().unwrap_or_default(),
                        sort_order: None,
                    },
                )
                .await?;
            }
        }
    }

    let modules = ModuleRepo::list_by_course(&state.pool, course.id).await?;
    Ok(Json(DataResponse { data: modules }))
}

/// POST /api/v1/manage/modules/order
///
/// Reorder modules: the body maps module ids to positions, e.g.
/// `{"5": 2, "7": 1}`. Rows the caller does not own are skipped silently;
/// the response is always `{"saved": "OK"}`.
pub async fn reorder(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<HashMap<String, i32>>,
) -> AppResult<Json<SavedResponse>> {
    require(&user, Permission::ChangeModule)?;

    for (raw_id, position) in &input {
        let id: DbId = raw_id.parse().map_err(|_| {
            AppError::Core(CoreError::Validation(format!(
                "Module id {raw_id:?} is not numeric"
            )))
        })?;
        ModuleRepo::set_position(&state.pool, id, user.user_id, *position).await?;
    }

    Ok(Json(SavedResponse::ok()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a module the caller owns AND that belongs to the given course.
/// Either mismatch is not-found.
async fn owned_module_in_course(
    state: &AppState,
    user: &AuthUser,
    id: DbId,
    course_id: DbId,
) -> AppResult<Module> {
    ModuleRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .filter(|m| m.course_id == course_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Module",
            id,
        }))
}
