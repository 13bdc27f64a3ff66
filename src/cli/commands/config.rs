//! Config command implementation.

use serde::Serialize;

use crate::cli::CliContext;
use crate::config::{Config, display_path};
use crate::error::Result;

#[derive(Serialize)]
struct ConfigOutput<'a> {
    data_dir: String,
    slot_file: String,
    #[serde(flatten)]
    config: &'a Config,
}

/// Execute the config command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or config.yaml is invalid.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let workspace = super::open_workspace(ctx)?;
    let output = ConfigOutput {
        data_dir: display_path(workspace.data_dir()).display().to_string(),
        slot_file: workspace.slot_path().display().to_string(),
        config: workspace.config(),
    };

    if ctx.json {
        super::print_json(&output)?;
    } else {
        print!("{}", serde_yaml::to_string(&output)?);
    }
    Ok(())
}
