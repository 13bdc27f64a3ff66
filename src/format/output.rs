use serde::{Deserialize, Serialize};
use shortcut_lib::Bookmark;

/// Bookmark with its zero-based display position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookmarkRow {
    pub position: usize,
    #[serde(flatten)]
    pub bookmark: Bookmark,
}

impl BookmarkRow {
    #[must_use]
    pub fn rows(bookmarks: &[Bookmark]) -> Vec<Self> {
        bookmarks
            .iter()
            .enumerate()
            .map(|(position, bookmark)| Self {
                position,
                bookmark: bookmark.clone(),
            })
            .collect()
    }
}

/// Outcome of a command that may change the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeReport {
    pub action: String,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<BookmarkRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ChangeReport {
    #[must_use]
    pub fn new(action: &str, changed: bool) -> Self {
        Self {
            action: action.to_string(),
            changed,
            bookmark: None,
            count: None,
            path: None,
        }
    }

    #[must_use]
    pub fn with_bookmark(mut self, position: usize, bookmark: &Bookmark) -> Self {
        self.bookmark = Some(BookmarkRow {
            position,
            bookmark: bookmark.clone(),
        });
        self
    }

    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
