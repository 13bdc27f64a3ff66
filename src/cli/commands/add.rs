use crate::cli::{AddArgs, CliContext};
use crate::error::Result;
use crate::format::{ChangeReport, format_bookmark_line};
use shortcut_lib::BookmarkDraft;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the slot cannot be written.
pub fn execute(args: AddArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let mut store = workspace.open_store();

    let draft = BookmarkDraft {
        title: args.title,
        url: args.url,
        color: args.color,
        description: args.description,
    };
    if draft.title.trim().is_empty() {
        tracing::warn!("Adding a bookmark with an empty title");
    }

    let bookmark = store.create(draft)?;
    let position = store.len() - 1;

    if ctx.json {
        super::print_json(&ChangeReport::new("add", true).with_bookmark(position, &bookmark))?;
    } else {
        println!("Added {}", format_bookmark_line(position, &bookmark));
    }
    Ok(())
}
