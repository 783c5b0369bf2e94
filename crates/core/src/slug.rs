//! Slug validation and generation.
//!
//! Slugs appear in public URLs and carry a per-entity-type uniqueness
//! constraint in the database; this module only enforces the character
//! shape.

use crate::error::CoreError;

/// Maximum slug length, matching the column width in the schema.
pub const MAX_SLUG_LEN: usize = 200;

/// Validate a caller-supplied slug.
///
/// A valid slug is non-empty, at most [`MAX_SLUG_LEN`] bytes, and contains
/// only lowercase ASCII letters, digits, and hyphens, with no leading,
/// trailing, or doubled hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(CoreError::Validation(
            "Slug may only contain lowercase letters, digits, and hyphens".into(),
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(CoreError::Validation(
            "Slug may not start or end with a hyphen, or contain consecutive hyphens".into(),
        ));
    }
    Ok(())
}

/// Derive a slug from a human-readable title.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// and trims hyphens at both ends. Returns an error when nothing sluggable
/// remains (e.g. an all-punctuation title).
pub fn slugify(title: &str) -> Result<String, CoreError> {
    let mut out = String::with_capacity(title.len());
    let mut last_hyphen = true; // suppress a leading hyphen
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out.truncate(MAX_SLUG_LEN);
    if out.is_empty() {
        return Err(CoreError::Validation(format!(
            "Cannot derive a slug from title {title:?}"
        )));
    }
    Ok(out)
}
