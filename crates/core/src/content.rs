//! The content-kind discriminator.
//!
//! A content row points at exactly one concrete item, tagged by kind.
//! Only the four kinds below are valid; anything else is rejected when the
//! tag is parsed or bound, never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Discriminator for the four concrete content item variants.
///
/// Maps to the PostgreSQL enum type `content_kind` and to the lowercase
/// names used in URLs and JSON (`text`, `video`, `image`, `file`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "content_kind", rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Video,
    Image,
    File,
}

impl ContentKind {
    /// All valid kinds, in declaration order.
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Text,
        ContentKind::Video,
        ContentKind::Image,
        ContentKind::File,
    ];

    /// The lowercase wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Video => "video",
            ContentKind::Image => "image",
            ContentKind::File => "file",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentKind::Text),
            "video" => Ok(ContentKind::Video),
            "image" => Ok(ContentKind::Image),
            "file" => Ok(ContentKind::File),
            other => Err(CoreError::Validation(format!(
                "Unknown content kind '{other}'. Valid kinds: text, video, image, file"
            ))),
        }
    }
}
