//! Command implementations, one module per subcommand.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod list;
pub mod reorder;
pub mod show;
pub mod version;

use serde::Serialize;

use crate::cli::CliContext;
use crate::config::Workspace;
use crate::error::Result;

/// Open the workspace named by the global `--data-dir`.
pub(crate) fn open_workspace(ctx: &CliContext) -> Result<Workspace> {
    Workspace::locate(&ctx.data_dir)
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
