//! Command-line interface for `shortcut_grid`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
use crate::logging;

/// `shortcut_grid` (sg) - ordered bookmark cards with JSON import/export.
#[derive(Parser, Debug)]
#[command(name = "sg")]
#[command(
    author,
    version,
    about = "Shortcut grid: ordered bookmark cards with JSON import/export",
    long_about = None,
    after_help = "Positions are zero-based. Every change is written to the data directory immediately."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Append diagnostics to this file as JSON lines
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Directory holding the bookmark slot and config.yaml
    #[arg(
        long,
        global = true,
        env = DATA_DIR_ENV,
        default_value = DEFAULT_DATA_DIR,
        value_name = "DIR"
    )]
    pub data_dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a shortcut workspace
    Init(InitArgs),

    /// Add a bookmark at the end of the grid
    Add(AddArgs),

    /// Edit fields of an existing bookmark
    Edit(EditArgs),

    /// Delete a bookmark
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Move the bookmark at one position to another
    #[command(name = "move", alias = "mv")]
    Move(MoveArgs),

    /// Move a bookmark one position towards the front
    Up(StepArgs),

    /// Move a bookmark one position towards the back
    Down(StepArgs),

    /// List bookmarks in grid order
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one bookmark
    Show(ShowArgs),

    /// Export all bookmarks to bookmarks.json
    Export(ExportArgs),

    /// Replace all bookmarks with the contents of an exported file
    Import(ImportArgs),

    /// List backups taken before imports
    History,

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Reset the bookmark slot even if it already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Card title
    pub title: String,

    /// Target address
    pub url: String,

    /// Card color (defaults to `default_color` from config.yaml)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Free-form note shown on the card
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args, Debug, Default)]
#[command(group(
    ArgGroup::new("changes")
        .required(true)
        .multiple(true)
        .args(["title", "url", "color", "description", "clear_description"])
))]
pub struct EditArgs {
    /// Bookmark ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New URL
    #[arg(long)]
    pub url: Option<String>,

    /// New color
    #[arg(long)]
    pub color: Option<String>,

    /// New description
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// Remove the description
    #[arg(long)]
    pub clear_description: bool,
}

#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    /// Bookmark ID
    pub id: String,
}

#[derive(Args, Debug, Default)]
pub struct MoveArgs {
    /// Current position
    pub from: usize,

    /// Target position
    pub to: usize,
}

#[derive(Args, Debug, Default)]
pub struct StepArgs {
    /// Position of the bookmark to move
    pub index: usize,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show bookmarks whose title, URL or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Bookmark ID
    pub id: String,
}

#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Output file or directory (default: ./bookmarks.json)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Debug, Default)]
pub struct ImportArgs {
    /// Exported bookmarks file
    pub file: PathBuf,

    /// Skip the backup of the current bookmarks
    #[arg(long)]
    pub no_backup: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub data_dir: PathBuf,
    pub json: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let ctx = CliContext {
        data_dir: cli.data_dir,
        json: cli.json,
    };
    tracing::debug!(data_dir = %ctx.data_dir.display(), "Starting sg");

    let Some(command) = cli.command else {
        println!("sg - shortcut grid. Use --help for usage.");
        return Ok(());
    };
    let name = command.name();

    match command {
        Commands::Init(args) => commands::init::execute(&args, &ctx)?,
        Commands::Add(args) => commands::add::execute(args, &ctx)?,
        Commands::Edit(args) => commands::edit::execute(args, &ctx)?,
        Commands::Delete(args) => commands::delete::execute(&args, &ctx)?,
        Commands::Move(args) => commands::reorder::execute_move(&args, &ctx)?,
        Commands::Up(args) => commands::reorder::execute_up(&args, &ctx)?,
        Commands::Down(args) => commands::reorder::execute_down(&args, &ctx)?,
        Commands::List(args) => commands::list::execute(&args, &ctx)?,
        Commands::Show(args) => commands::show::execute(&args, &ctx)?,
        Commands::Export(args) => commands::export::execute(&args, &ctx)?,
        Commands::Import(args) => commands::import::execute(&args, &ctx)?,
        Commands::History => commands::history::execute(&ctx)?,
        Commands::Config => commands::config::execute(&ctx)?,
        Commands::Completions(args) => commands::completions::execute(&args),
        Commands::Version(args) => commands::version::execute(&args, &ctx)?,
    }

    tracing::debug!(command = name, "Command finished");
    Ok(())
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Add(_) => "add",
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
            Self::Move(_) => "move",
            Self::Up(_) => "up",
            Self::Down(_) => "down",
            Self::List(_) => "list",
            Self::Show(_) => "show",
            Self::Export(_) => "export",
            Self::Import(_) => "import",
            Self::History => "history",
            Self::Config => "config",
            Self::Completions(_) => "completions",
            Self::Version(_) => "version",
        }
    }
}
