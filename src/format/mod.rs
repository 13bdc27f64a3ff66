//! Output formatting for `shortcut_grid`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`BookmarkRow`] - Bookmark with its display position (list/search)
//! - [`ChangeReport`] - Result of a mutating command

mod output;
mod text;

pub use output::{BookmarkRow, ChangeReport};
pub use text::{format_bookmark_details, format_bookmark_line, format_color_badge, pad_to_width};
