//! Authorization guards.
//!
//! Two layers compose per route: a role-gating extractor rejects requests
//! whose role is plainly wrong, and [`require`] checks the
//! operation-specific permission inside the handler. Ownership is the
//! third gate and lives in the owner-scoped repository queries, which
//! turn a mismatch into not-found.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use scherzo_core::error::CoreError;
use scherzo_core::permissions::{role_has, Permission};
use scherzo_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Check that `user`'s role carries `permission`. Rejects with 403.
///
/// ```ignore
/// let user = ...; // AuthUser
/// require(&user, Permission::AddCourse)?;
/// ```
pub fn require(user: &AuthUser, permission: Permission) -> Result<(), AppError> {
    if role_has(&user.role, permission) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Missing permission for this operation ({permission:?})"
        ))))
    }
}

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
