//! Version command implementation.

use crate::cli::{CliContext, VersionArgs};
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    library: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &VersionArgs, ctx: &CliContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if args.short {
        println!("{version}");
        return Ok(());
    }

    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    if ctx.json {
        return super::print_json(&VersionOutput {
            version,
            build,
            library: shortcut_lib::VERSION,
        });
    }

    println!("sg {version} ({build})");
    Ok(())
}
