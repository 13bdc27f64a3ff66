use crate::cli::{CliContext, DeleteArgs};
use crate::error::Result;
use crate::format::ChangeReport;
use shortcut_lib::BookmarkError;

/// Execute the delete command.
///
/// Deleting an unknown ID leaves the list as it was and is reported as
/// `BookmarkNotFound`.
///
/// # Errors
///
/// Returns an error if the ID is unknown or the slot cannot be written.
pub fn execute(args: &DeleteArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let mut store = workspace.open_store();

    let removed = store.get(&args.id).ok().cloned();
    if !store.delete(&args.id)? {
        return Err(BookmarkError::BookmarkNotFound {
            id: args.id.clone(),
        }
        .into());
    }

    if ctx.json {
        super::print_json(&ChangeReport::new("delete", true).with_count(store.len()))?;
    } else if let Some(bookmark) = removed {
        println!("Deleted {}: {}", bookmark.id, bookmark.title);
    }
    Ok(())
}
