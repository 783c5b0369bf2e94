//! Domain vocabulary for the scherzo catalog.
//!
//! Pure types and logic shared by the persistence and HTTP layers:
//! the error taxonomy, id/timestamp aliases, role and permission model,
//! the content-kind discriminator, slug handling, and typed cache keys.
//! No I/O happens here.

pub mod cache;
pub mod content;
pub mod error;
pub mod permissions;
pub mod roles;
pub mod slug;
pub mod types;
