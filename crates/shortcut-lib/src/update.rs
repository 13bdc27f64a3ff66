//! Partial updates for bookmark edits.

use crate::model::Bookmark;

/// Fields to change on a bookmark. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct BookmarkUpdate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub color: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl BookmarkUpdate {
    /// Produce the edited copy of `bookmark`. The ID is never changed.
    #[must_use]
    pub fn apply(&self, bookmark: &Bookmark) -> Bookmark {
        let mut edited = bookmark.clone();
        if let Some(ref title) = self.title {
            edited.title.clone_from(title);
        }
        if let Some(ref url) = self.url {
            edited.url.clone_from(url);
        }
        if let Some(ref color) = self.color {
            edited.color.clone_from(color);
        }
        if let Some(ref description) = self.description {
            edited.description.clone_from(description);
        }
        edited
    }
}
