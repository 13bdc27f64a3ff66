//! Import command implementation.
//!
//! Replaces the whole grid with an exported document. A rejected document
//! leaves both the grid and the slot file exactly as they were.

use crate::cli::{CliContext, ImportArgs};
use crate::error::Result;
use crate::format::ChangeReport;
use crate::sync::history::backup_before_import;
use shortcut_lib::transfer;

/// Execute the import command.
///
/// # Errors
///
/// Returns `Import` if the document is rejected, `FileNotFound` if it does
/// not exist, or an error if the backup or slot write fails.
pub fn execute(args: &ImportArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let mut store = workspace.open_store();

    // Parse before backing up so a bad file leaves no trace
    let text = transfer::read_document(&args.file)?;
    let bookmarks = transfer::parse_import(&text)?;

    let backup = if args.no_backup {
        None
    } else {
        backup_before_import(
            &workspace.slot_path(),
            &workspace.history_dir(),
            &workspace.config().history,
        )?
    };

    let replaced = store.len();
    let count = bookmarks.len();
    store.replace_all(bookmarks)?;
    tracing::info!(
        file = %args.file.display(),
        replaced,
        count,
        "Replaced bookmark list from import"
    );

    if ctx.json {
        let mut change = ChangeReport::new("import", true).with_count(count);
        if let Some(path) = &backup {
            change = change.with_path(path.display().to_string());
        }
        super::print_json(&change)?;
    } else {
        println!(
            "Imported {count} bookmark(s) from {} (replaced {replaced})",
            args.file.display()
        );
        if let Some(path) = backup {
            println!("Previous bookmarks saved to {}", path.display());
        }
    }
    Ok(())
}
