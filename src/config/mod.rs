//! Configuration management for `shortcut_grid`.
//!
//! Configuration is loaded from `<data-dir>/config.yaml`. The data directory
//! itself comes from `--data-dir`, then `SHORTCUT_GRID_DIR`, then
//! `.shortcuts` in the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shortcut_lib::{BookmarkStore, DEFAULT_COLOR, DEFAULT_SLOT_KEY, FileSlot};

use crate::error::{AppError, Result};
use crate::sync::history::HistoryConfig;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "SHORTCUT_GRID_DIR";
/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = ".shortcuts";
/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "config.yaml";
/// Import backup directory inside the data directory.
pub const HISTORY_DIR: &str = ".history";

/// Template written by `sg init`.
pub const CONFIG_TEMPLATE: &str = r"# Shortcut grid configuration
# default_color: blue
# slot_key: bookmarks
# history:
#   enabled: true
#   max_count: 20
#   max_age_days: 30
";

/// Settings read from `config.yaml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color given to new bookmarks without `--color`.
    pub default_color: String,
    /// Name of the persisted slot holding the bookmark list.
    pub slot_key: String,
    /// Import backup settings.
    pub history: HistoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_COLOR.to_string(),
            slot_key: DEFAULT_SLOT_KEY.to_string(),
            history: HistoryConfig::default(),
        }
    }
}

impl Config {
    /// Strip surrounding whitespace from name-like values.
    pub fn normalize(&mut self) {
        self.slot_key = self.slot_key.trim().to_string();
        self.default_color = self.default_color.trim().to_string();
    }

    /// Check values that would otherwise fail later in confusing ways.
    ///
    /// # Errors
    ///
    /// Returns `Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        let key = self.slot_key.as_str();
        if key.is_empty() {
            return Err(AppError::Config("slot_key cannot be empty".to_string()));
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(AppError::Config(format!(
                "slot_key must be a plain name, got '{}'",
                self.slot_key
            )));
        }
        if self.default_color.trim().is_empty() {
            return Err(AppError::Config(
                "default_color cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load `config.yaml` from `data_dir`, falling back to defaults when absent.
///
/// # Errors
///
/// Returns `Yaml` if the file is malformed, `Config` if a value is invalid,
/// or `Io` if it cannot be read.
pub fn load_config(data_dir: &Path) -> Result<Config> {
    let path = data_dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(AppError::Io(e)),
    };

    // A file with only comments parses as null
    let mut config = if content.trim().is_empty() || is_comment_only(&content) {
        Config::default()
    } else {
        serde_yaml::from_str::<Config>(&content)?
    };
    config.normalize();
    config.validate()?;
    tracing::debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

fn is_comment_only(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

/// An initialized data directory plus its configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Open an existing data directory.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the directory is missing, or any error from
    /// [`load_config`].
    pub fn locate(data_dir: &Path) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(AppError::NotInitialized {
                path: data_dir.to_path_buf(),
            });
        }
        let config = load_config(data_dir)?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
        })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// File backing the bookmark slot.
    #[must_use]
    pub fn slot_path(&self) -> PathBuf {
        FileSlot::new(&self.data_dir).path_for(&self.config.slot_key)
    }

    #[must_use]
    pub fn history_dir(&self) -> PathBuf {
        self.data_dir.join(HISTORY_DIR)
    }

    /// Open the bookmark store on this workspace's slot.
    #[must_use]
    pub fn open_store(&self) -> BookmarkStore<FileSlot> {
        let mut store =
            BookmarkStore::open_with_key(FileSlot::new(&self.data_dir), &self.config.slot_key);
        store.set_default_color(&self.config.default_color);
        store
    }
}

/// Best-effort absolute form of `path` for display.
#[must_use]
pub fn display_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
