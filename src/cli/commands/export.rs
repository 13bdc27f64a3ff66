use crate::cli::{CliContext, ExportArgs};
use crate::error::Result;
use crate::format::ChangeReport;
use shortcut_lib::transfer::{self, EXPORT_FILE_NAME};
use std::path::PathBuf;

/// Execute the export command.
///
/// Writes `./bookmarks.json` unless `--output` or `--stdout` is given.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the file cannot be written.
pub fn execute(args: &ExportArgs, ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let store = workspace.open_store();

    if args.stdout {
        println!("{}", transfer::export(store.bookmarks())?);
        return Ok(());
    }

    let target = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    let written = transfer::export_to(store.bookmarks(), &target)?;

    if ctx.json {
        super::print_json(
            &ChangeReport::new("export", false)
                .with_count(store.len())
                .with_path(written.display().to_string()),
        )?;
    } else {
        println!(
            "Exported {} bookmark(s) to {}",
            store.len(),
            written.display()
        );
    }
    Ok(())
}
