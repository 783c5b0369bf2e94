//! Typed keys for the external catalog cache.
//!
//! The cache is a pass-through key/value store; these are the only keys the
//! application reads or writes. Writes to the catalog never invalidate
//! them -- entries age out by TTL only.

use std::fmt;

use crate::types::DbId;

/// A key in the catalog cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey {
    /// Every track, with course counts.
    AllTracks,
    /// Every course, with module counts.
    AllCourses,
    /// Courses belonging to one track.
    TrackCourses(DbId),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::AllTracks => f.write_str("all_tracks"),
            CacheKey::AllCourses => f.write_str("all_courses"),
            CacheKey::TrackCourses(id) => write!(f, "track_{id}_courses"),
        }
    }
}
