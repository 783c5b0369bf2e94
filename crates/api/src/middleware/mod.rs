//! Request guards: authentication extraction and authorization checks.

pub mod auth;
pub mod rbac;
