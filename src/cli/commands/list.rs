//! List command implementation.
//!
//! Shows the grid in display order with zero-based positions. With
//! `--search` only matching cards are shown, still with their real positions.

use crate::cli::{CliContext, ListArgs};
use crate::error::Result;
use crate::format::{BookmarkRow, format_bookmark_line};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or JSON output fails.
pub fn execute(args: &ListArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let store = workspace.open_store();

    let rows: Vec<BookmarkRow> = match args.search.as_deref() {
        Some(query) => store
            .search(query)
            .into_iter()
            .map(|(position, bookmark)| BookmarkRow {
                position,
                bookmark: bookmark.clone(),
            })
            .collect(),
        None => BookmarkRow::rows(store.bookmarks()),
    };

    if ctx.json {
        super::print_json(&rows)?;
    } else if rows.is_empty() {
        println!("No bookmarks found.");
    } else {
        for row in &rows {
            println!("{}", format_bookmark_line(row.position, &row.bookmark));
        }
        println!("\n{} bookmark(s)", rows.len());
    }

    Ok(())
}
