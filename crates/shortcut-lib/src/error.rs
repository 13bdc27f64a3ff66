//! Error types for `shortcut-lib`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why an import document was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportErrorKind {
    /// The text is not valid JSON (or ends early).
    Syntax,
    /// The text is valid JSON but not an array of bookmark records.
    Shape,
}

impl fmt::Display for ImportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "malformed JSON"),
            Self::Shape => write!(f, "not a bookmark list"),
        }
    }
}

/// Primary error type for shortcut-lib operations.
#[derive(Error, Debug)]
pub enum BookmarkError {
    // === Bookmark Errors ===
    /// Bookmark with the specified ID was not found.
    #[error("Bookmark not found: {id}")]
    BookmarkNotFound { id: String },

    // === Import Errors ===
    /// An import document could not be turned into a bookmark list.
    #[error("Import failed ({kind}): {reason}")]
    Import {
        kind: ImportErrorKind,
        reason: String,
    },

    // === Storage Errors ===
    /// Generic slot storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookmarkError {
    #[must_use]
    pub fn import(kind: ImportErrorKind, reason: impl Into<String>) -> Self {
        Self::Import {
            kind,
            reason: reason.into(),
        }
    }
}

/// Result type using `BookmarkError`.
pub type Result<T> = std::result::Result<T, BookmarkError>;
