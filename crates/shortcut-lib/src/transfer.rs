//! Bulk import and export of the bookmark list.
//!
//! The export document is a pretty-printed JSON array with the same record
//! shape as the persisted slot, and is the only accepted import format.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::error::Category;

use crate::error::{BookmarkError, ImportErrorKind, Result};
use crate::model::Bookmark;
use crate::slot::Slot;
use crate::store::BookmarkStore;

/// File name used for exported documents.
pub const EXPORT_FILE_NAME: &str = "bookmarks.json";

/// Serialize `bookmarks` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn export(bookmarks: &[Bookmark]) -> Result<String> {
    Ok(serde_json::to_string_pretty(bookmarks)?)
}

/// Write the export document to `path`.
///
/// If `path` is an existing directory the document is written to
/// `path/bookmarks.json`. Returns the file that was written.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn export_to(bookmarks: &[Bookmark], path: &Path) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(EXPORT_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    let document = export(bookmarks)?;
    let tmp_path = target.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(document.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    drop(file);
    fs::rename(&tmp_path, &target)?;

    tracing::info!(path = %target.display(), count = bookmarks.len(), "Exported bookmarks");
    Ok(target)
}

/// Parse an import document into a bookmark list.
///
/// # Errors
///
/// Returns `Import` with kind `Syntax` for malformed JSON and kind `Shape`
/// for valid JSON that is not an array of bookmark records.
pub fn parse_import(text: &str) -> Result<Vec<Bookmark>> {
    serde_json::from_str::<Vec<Bookmark>>(text).map_err(|e| {
        let kind = match e.classify() {
            Category::Data => ImportErrorKind::Shape,
            Category::Syntax | Category::Eof | Category::Io => ImportErrorKind::Syntax,
        };
        BookmarkError::import(kind, e.to_string())
    })
}

/// Replace the store's list with the parsed document.
///
/// On failure the store and its slot are left untouched. Returns the
/// number of imported bookmarks.
///
/// # Errors
///
/// Returns `Import` if the document is rejected, or an error if the slot
/// write fails.
pub fn import<S: Slot>(store: &mut BookmarkStore<S>, text: &str) -> Result<usize> {
    let bookmarks = match parse_import(text) {
        Ok(bookmarks) => bookmarks,
        Err(e) => {
            tracing::warn!(error = %e, "Import rejected; bookmark list unchanged");
            return Err(e);
        }
    };
    let count = bookmarks.len();
    store.replace_all(bookmarks)?;
    tracing::info!(count, "Imported bookmarks");
    Ok(count)
}

/// Read the text of an import document.
///
/// # Errors
///
/// Returns `FileNotFound` if `path` does not exist, or `Io` if it cannot be
/// read.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BookmarkError::FileNotFound(path.to_path_buf())
        } else {
            BookmarkError::Io(e)
        }
    })
}

/// Read `path` and import its contents.
///
/// # Errors
///
/// Returns any error from [`read_document`] or [`import`].
pub fn import_file<S: Slot>(store: &mut BookmarkStore<S>, path: &Path) -> Result<usize> {
    let text = read_document(path)?;
    import(store, &text)
}
