//! Ordered in-memory bookmark store bound to a persisted slot.
//!
//! Every mutator rewrites the slot before returning, so the slot always
//! mirrors the in-memory list once a call has completed.

use chrono::Utc;

use crate::error::{BookmarkError, Result};
use crate::model::{Bookmark, BookmarkDraft, DEFAULT_COLOR};
use crate::slot::{DEFAULT_SLOT_KEY, Slot};
use crate::update::BookmarkUpdate;
use crate::util::generate_id;

/// Read the bookmark list stored under `key`.
///
/// Missing, empty and unparsable slot content all yield an empty list.
/// Unparsable content is logged, not returned as an error.
pub fn load<S: Slot + ?Sized>(slot: &S, key: &str) -> Vec<Bookmark> {
    let content = match slot.read(key) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Could not read bookmark slot; starting empty");
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<Bookmark>>(&content) {
        Ok(bookmarks) => {
            tracing::debug!(key, count = bookmarks.len(), "Loaded bookmarks");
            bookmarks
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Bookmark slot is unparsable; starting empty");
            Vec::new()
        }
    }
}

/// In-memory bookmark list mirrored to a [`Slot`].
pub struct BookmarkStore<S: Slot> {
    bookmarks: Vec<Bookmark>,
    slot: S,
    key: String,
    default_color: String,
}

impl<S: Slot> BookmarkStore<S> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Open the store on the default slot key.
    pub fn open(slot: S) -> Self {
        Self::open_with_key(slot, DEFAULT_SLOT_KEY)
    }

    /// Open the store, loading whatever `slot` holds under `key`.
    pub fn open_with_key(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let bookmarks = load(&slot, &key);
        Self {
            bookmarks,
            slot,
            key,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Set the color used by [`Self::create`] when a draft has none.
    pub fn set_default_color(&mut self, color: impl Into<String>) {
        self.default_color = color.into();
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Release the slot, dropping the in-memory list.
    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Serialize the full list and overwrite the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the slot write fails.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.bookmarks)?;
        self.slot.write(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = self.bookmarks.len(), "Persisted bookmarks");
        Ok(())
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Assign a fresh ID to `draft` without adding it.
    #[must_use]
    pub fn new_bookmark(&self, draft: BookmarkDraft) -> Bookmark {
        let id = generate_id(&draft.title, &draft.url, Utc::now(), |id| {
            self.contains(id)
        });
        draft.into_bookmark(id, &self.default_color)
    }

    /// Assign an ID to `draft`, append it and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn create(&mut self, draft: BookmarkDraft) -> Result<Bookmark> {
        let bookmark = self.new_bookmark(draft);
        self.add(bookmark.clone())?;
        Ok(bookmark)
    }

    /// Append `bookmark` to the end of the list and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn add(&mut self, bookmark: Bookmark) -> Result<()> {
        tracing::debug!(id = %bookmark.id, "Adding bookmark");
        self.bookmarks.push(bookmark);
        self.persist()
    }

    /// Replace the bookmark whose ID matches `bookmark.id`, keeping its
    /// position, and persist.
    ///
    /// Returns `false` and leaves the list unchanged if no ID matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn edit(&mut self, bookmark: Bookmark) -> Result<bool> {
        let replaced = match self.bookmarks.iter_mut().find(|b| b.id == bookmark.id) {
            Some(existing) => {
                *existing = bookmark;
                true
            }
            None => false,
        };
        self.persist()?;
        Ok(replaced)
    }

    /// Apply `update` to the bookmark with `id` and return the edited copy.
    ///
    /// # Errors
    ///
    /// Returns `BookmarkNotFound` if no bookmark has this ID, or an error
    /// if the slot write fails.
    pub fn update(&mut self, id: &str, update: &BookmarkUpdate) -> Result<Bookmark> {
        let edited = update.apply(self.get(id)?);
        self.edit(edited.clone())?;
        Ok(edited)
    }

    /// Remove the bookmark with `id` and persist.
    ///
    /// Returns `false` and leaves the list unchanged if no ID matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        let removed = self.bookmarks.len() != before;
        if removed {
            tracing::debug!(id, "Deleted bookmark");
        }
        self.persist()?;
        Ok(removed)
    }

    /// Replace the whole list and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn replace_all(&mut self, bookmarks: Vec<Bookmark>) -> Result<()> {
        tracing::debug!(count = bookmarks.len(), "Replacing bookmark list");
        self.bookmarks = bookmarks;
        self.persist()
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Remove the bookmark at `from` and reinsert it at `to`.
    ///
    /// Both indices must be in `0..len`. Otherwise nothing moves, nothing is
    /// written and `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn move_bookmark(&mut self, from: usize, to: usize) -> Result<bool> {
        let len = self.bookmarks.len();
        if from >= len || to >= len {
            tracing::debug!(from, to, len, "Rejected out-of-range move");
            return Ok(false);
        }

        let moved = self.bookmarks.remove(from);
        self.bookmarks.insert(to, moved);
        self.persist()?;
        Ok(true)
    }

    /// Swap the bookmark at `index` with its predecessor.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn move_up(&mut self, index: usize) -> Result<bool> {
        if index == 0 {
            return Ok(false);
        }
        self.move_bookmark(index, index - 1)
    }

    /// Swap the bookmark at `index` with its successor.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn move_down(&mut self, index: usize) -> Result<bool> {
        if index >= self.bookmarks.len().saturating_sub(1) {
            return Ok(false);
        }
        self.move_bookmark(index, index + 1)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All bookmarks in display order.
    #[must_use]
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Get a single bookmark by ID.
    ///
    /// # Errors
    ///
    /// Returns `BookmarkNotFound` if the bookmark doesn't exist.
    pub fn get(&self, id: &str) -> Result<&Bookmark> {
        self.bookmarks
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BookmarkError::BookmarkNotFound { id: id.to_string() })
    }

    /// Display position of the bookmark with `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Case-insensitive substring search over title, URL and description.
    ///
    /// Results keep display order and carry their position.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<(usize, &Bookmark)> {
        let query_lower = query.to_lowercase();
        self.bookmarks
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                b.title.to_lowercase().contains(&query_lower)
                    || b.url.to_lowercase().contains(&query_lower)
                    || b
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
