use crate::cli::{CliContext, EditArgs};
use crate::error::Result;
use crate::format::{ChangeReport, format_bookmark_line};
use shortcut_lib::BookmarkUpdate;

/// Execute the edit command.
///
/// # Errors
///
/// Returns `BookmarkNotFound` if no bookmark has the given ID, or an error if
/// the slot cannot be written.
pub fn execute(args: EditArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let mut store = workspace.open_store();

    let description = if args.clear_description {
        Some(None)
    } else {
        args.description.map(Some)
    };
    let update = BookmarkUpdate {
        title: args.title,
        url: args.url,
        color: args.color,
        description,
    };

    let edited = store.update(&args.id, &update)?;
    let position = store.position(&edited.id).unwrap_or_default();

    if ctx.json {
        super::print_json(&ChangeReport::new("edit", true).with_bookmark(position, &edited))?;
    } else {
        println!("Updated {}", format_bookmark_line(position, &edited));
    }
    Ok(())
}
