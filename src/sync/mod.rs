//! Safety net around wholesale import.
//!
//! - [`history`] - timestamped slot backups taken before an import replaces
//!   the bookmark list

pub mod history;
