//! Local history backups of the bookmark slot.
//!
//! This module handles:
//! - Creating timestamped copies of the slot file before an import replaces it
//! - Rotating backups based on count and age
//! - Listing backups for `sg history`

use crate::error::Result;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Configuration for history backups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub max_count: usize,
    pub max_age_days: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_count: 20,
            max_age_days: 30,
        }
    }
}

/// Backup entry metadata.
#[derive(Debug, Clone, Serialize)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub size: u64,
    /// Orders backups taken within the same second.
    #[serde(skip)]
    pub seq: u32,
}

/// Copy `slot_path` into `history_dir` before it gets overwritten.
///
/// Nothing happens when history is disabled, the slot file does not exist
/// yet, or its content matches the newest backup. Returns the new backup's
/// path when one was written.
///
/// # Errors
///
/// Returns an error if the backup cannot be created or old backups cannot
/// be pruned.
pub fn backup_before_import(
    slot_path: &Path,
    history_dir: &Path,
    config: &HistoryConfig,
) -> Result<Option<PathBuf>> {
    if !config.enabled || !slot_path.exists() {
        return Ok(None);
    }

    let stem = backup_stem(slot_path);
    fs::create_dir_all(history_dir)?;

    if let Some(latest) = list_backups(history_dir, &stem)?.into_iter().next() {
        if fs::read(slot_path)? == fs::read(&latest.path)? {
            tracing::debug!(
                "Skipping backup: identical to latest {}",
                latest.path.display()
            );
            return Ok(None);
        }
    }

    let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    let backup_path = free_backup_path(history_dir, &stem, &timestamp);
    fs::copy(slot_path, &backup_path)?;
    tracing::debug!("Created backup: {}", backup_path.display());

    rotate_history(history_dir, &stem, config)?;

    Ok(Some(backup_path))
}

/// First unused `<stem>.<timestamp>[-N].json` in `history_dir`.
fn free_backup_path(history_dir: &Path, stem: &str, timestamp: &str) -> PathBuf {
    let first = history_dir.join(format!("{stem}.{timestamp}.json"));
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|seq| history_dir.join(format!("{stem}.{timestamp}-{seq}.json")))
        .find(|path| !path.exists())
        .unwrap_or(first)
}

/// Rotate history backups based on config limits.
fn rotate_history(history_dir: &Path, stem: &str, config: &HistoryConfig) -> Result<usize> {
    let backups = list_backups(history_dir, stem)?;
    let cutoff = Utc::now() - chrono::Duration::days(i64::from(config.max_age_days));

    let mut deleted_count = 0;
    for (idx, entry) in backups.iter().enumerate() {
        // The newest backup always survives
        if idx == 0 {
            continue;
        }
        if entry.timestamp < cutoff || idx >= config.max_count {
            fs::remove_file(&entry.path)?;
            deleted_count += 1;
        }
    }

    if deleted_count > 0 {
        tracing::debug!("Pruned {} old backup(s)", deleted_count);
    }

    Ok(deleted_count)
}

/// List backups of the slot named `stem`, newest first.
///
/// Files that do not match `<stem>.YYYYMMDD_HHMMSS.json` are ignored.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_backups(history_dir: &Path, stem: &str) -> Result<Vec<BackupEntry>> {
    if !history_dir.exists() {
        return Ok(Vec::new());
    }

    let mut backups = Vec::new();

    for entry in fs::read_dir(history_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some((timestamp, seq)) = parse_backup_name(name, stem) else {
            continue;
        };
        if let Ok(metadata) = fs::metadata(&path) {
            backups.push(BackupEntry {
                path,
                timestamp,
                size: metadata.len(),
                seq,
            });
        }
    }

    backups.sort_by(|a, b| (b.timestamp, b.seq).cmp(&(a.timestamp, a.seq)));

    Ok(backups)
}

/// Slot file name without its `.json` extension.
#[must_use]
pub fn backup_stem(slot_path: &Path) -> String {
    slot_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("bookmarks")
        .to_string()
}

/// Timestamp and same-second sequence number from a backup file name.
fn parse_backup_name(name: &str, stem: &str) -> Option<(DateTime<Utc>, u32)> {
    let rest = name
        .strip_prefix(stem)?
        .strip_prefix('.')?
        .strip_suffix(".json")?;
    let (ts_str, seq) = match rest.split_once('-') {
        Some((ts_str, seq)) => (ts_str, seq.parse().ok()?),
        None => (rest, 0),
    };
    let timestamp = NaiveDateTime::parse_from_str(ts_str, TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| Utc.from_utc_datetime(&dt))?;
    Some((timestamp, seq))
}
