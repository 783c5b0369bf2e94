use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every failure a handler can report maps onto one of these variants;
/// the HTTP layer owns the status-code mapping.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist -- or exists but belongs to someone else.
    /// Ownership mismatches are deliberately indistinguishable from
    /// non-existence.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Slug-addressed lookup that matched nothing.
    #[error("Entity not found: {entity} with slug {slug:?}")]
    NotFoundSlug { entity: &'static str, slug: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
