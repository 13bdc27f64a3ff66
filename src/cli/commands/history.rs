//! History command implementation.

use crate::cli::CliContext;
use crate::error::Result;
use crate::sync::history::{backup_stem, list_backups};

/// Execute the history command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the backup directory
/// cannot be read.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let stem = backup_stem(&workspace.slot_path());
    let backups = list_backups(&workspace.history_dir(), &stem)?;

    if ctx.json {
        return super::print_json(&backups);
    }

    if backups.is_empty() {
        println!("No import backups.");
        return Ok(());
    }

    for entry in &backups {
        println!(
            "{}  {:>8} bytes  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.size,
            entry.path.display()
        );
    }
    println!("\nRestore one with: sg import <PATH>");
    Ok(())
}
