use crate::cli::{CliContext, InitArgs};
use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE, Workspace, display_path};
use crate::error::{AppError, Result};
use crate::format::ChangeReport;
use shortcut_lib::{FileSlot, Slot};
use std::fs;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the directory or slot file cannot be created.
pub fn execute(args: &InitArgs, ctx: &CliContext) -> Result<()> {
    let data_dir = ctx.data_dir.as_path();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    // Config first so a custom slot_key from an existing file is honored
    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    let workspace = Workspace::locate(data_dir)?;
    let slot_path = workspace.slot_path();
    if slot_path.exists() && !args.force {
        return Err(AppError::AlreadyInitialized { path: slot_path });
    }

    let mut slot = FileSlot::new(data_dir);
    slot.write(&workspace.config().slot_key, "[]")?;

    let gitignore_path = data_dir.join(".gitignore");
    if !gitignore_path.exists() {
        let gitignore = r"# Temporary
*.tmp

# Import backups
.history/
";
        fs::write(gitignore_path, gitignore)?;
    }

    tracing::info!(path = %slot_path.display(), "Initialized bookmark slot");

    let shown = display_path(data_dir);
    if ctx.json {
        super::print_json(
            &ChangeReport::new("init", true)
                .with_count(0)
                .with_path(shown.display().to_string()),
        )?;
    } else {
        println!("Initialized shortcut workspace in {}", shown.display());
    }
    Ok(())
}
