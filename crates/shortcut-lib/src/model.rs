//! Core data types for shortcut-lib.
//!
//! The serde shape here is the persisted and exported record shape, so
//! field names and ordering must stay stable.

use serde::{Deserialize, Serialize};

/// Color assigned to a bookmark when none is given.
pub const DEFAULT_COLOR: &str = "blue";

/// A single shortcut card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub color: String,
    /// Absent in records written before descriptions existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Bookmark {
    /// Build a bookmark with an already assigned ID.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            color: color.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The user-supplied fields of a bookmark that does not have an ID yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl BookmarkDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Attach an ID, falling back to `default_color` when no color was set.
    #[must_use]
    pub fn into_bookmark(self, id: String, default_color: &str) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            color: self.color.unwrap_or_else(|| default_color.to_string()),
            description: self.description,
        }
    }
}
