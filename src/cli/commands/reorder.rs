//! Move, up and down commands.
//!
//! Positions outside the grid are rejected: the list is left as it was, a
//! message is printed and the command still succeeds.

use crate::cli::{CliContext, MoveArgs, StepArgs};
use crate::error::Result;
use crate::format::{ChangeReport, format_bookmark_line};
use shortcut_lib::{BookmarkStore, FileSlot};

/// Execute the move command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the slot cannot be written.
pub fn execute_move(args: &MoveArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let mut store = workspace.open_store();
    let moved = store.move_bookmark(args.from, args.to)?;
    report(&store, "move", moved, args.to, ctx)
}

/// Execute the up command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the slot cannot be written.
pub fn execute_up(args: &StepArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let mut store = workspace.open_store();
    let moved = store.move_up(args.index)?;
    report(&store, "up", moved, args.index.wrapping_sub(1), ctx)
}

/// Execute the down command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the slot cannot be written.
pub fn execute_down(args: &StepArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let mut store = workspace.open_store();
    let moved = store.move_down(args.index)?;
    report(&store, "down", moved, args.index.saturating_add(1), ctx)
}

fn report(
    store: &BookmarkStore<FileSlot>,
    action: &str,
    moved: bool,
    landed_at: usize,
    ctx: &CliContext,
) -> Result<()> {
    let landed = if moved {
        store.bookmarks().get(landed_at)
    } else {
        None
    };

    if ctx.json {
        let mut change = ChangeReport::new(action, moved).with_count(store.len());
        if let Some(bookmark) = landed {
            change = change.with_bookmark(landed_at, bookmark);
        }
        return super::print_json(&change);
    }

    match landed {
        Some(bookmark) => println!("Moved {}", format_bookmark_line(landed_at, bookmark)),
        None => println!(
            "Nothing moved: position out of range (grid has {} bookmark(s))",
            store.len()
        ),
    }
    Ok(())
}
