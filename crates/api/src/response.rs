//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// Wraps any serializable payload in the project's standard response
/// format.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Fixed `{ "saved": "OK" }` acknowledgement returned by the reorder
/// endpoints.
#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub saved: &'static str,
}

impl SavedResponse {
    pub fn ok() -> Self {
        Self { saved: "OK" }
    }
}
