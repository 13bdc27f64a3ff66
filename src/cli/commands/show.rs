//! Show command implementation.

use crate::cli::{CliContext, ShowArgs};
use crate::error::Result;
use crate::format::{BookmarkRow, format_bookmark_details};

/// Execute the show command.
///
/// # Errors
///
/// Returns `BookmarkNotFound` if the ID is unknown.
pub fn execute(args: &ShowArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let store = workspace.open_store();

    let bookmark = store.get(&args.id)?;
    let position = store.position(&args.id).unwrap_or_default();

    if ctx.json {
        super::print_json(&BookmarkRow {
            position,
            bookmark: bookmark.clone(),
        })?;
    } else {
        println!("{}", format_bookmark_details(position, bookmark));
    }

    Ok(())
}
