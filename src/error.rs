//! Error types for `shortcut_grid`.
//!
//! Store and import failures come from `shortcut-lib`; this layer adds the
//! workspace and configuration errors the CLI can hit.

use std::path::PathBuf;
use thiserror::Error;

use shortcut_lib::BookmarkError;

/// Error type for command execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error raised by the bookmark store or the import/export adapter.
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),

    // === Workspace Errors ===
    /// No data directory exists yet.
    #[error("Shortcut workspace not initialized: run 'sg init' (looked in {path})")]
    NotInitialized { path: PathBuf },

    /// `init` found an existing slot and `--force` was not given.
    #[error("Already initialized: {path}")]
    AlreadyInitialized { path: PathBuf },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML config parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error for command output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
