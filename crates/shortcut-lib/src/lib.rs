//! `shortcut-lib` — ordered bookmark store with JSON import/export.
//!
//! The list lives in memory and is mirrored to a [`Slot`] after every
//! mutation. Slots are key-value stores; [`FileSlot`] keeps one JSON file
//! per key and [`MemorySlot`] keeps everything in memory.
//!
//! # Quick Start
//!
//! ```no_run
//! use shortcut_lib::{BookmarkDraft, BookmarkStore, FileSlot, transfer};
//!
//! let mut store = BookmarkStore::open(FileSlot::new(".shortcuts"));
//!
//! let rust = store.create(BookmarkDraft::new("Rust", "https://rust-lang.org")).unwrap();
//! store.move_up(store.position(&rust.id).unwrap()).unwrap();
//!
//! let document = transfer::export(store.bookmarks()).unwrap();
//! transfer::import(&mut store, &document).unwrap();
//! ```

pub mod error;
pub mod model;
pub mod slot;
pub mod store;
pub mod transfer;
pub mod update;
pub mod util;

pub use error::{BookmarkError, ImportErrorKind, Result};
pub use model::{Bookmark, BookmarkDraft, DEFAULT_COLOR};
pub use slot::{DEFAULT_SLOT_KEY, FileSlot, MemorySlot, Slot};
pub use store::BookmarkStore;
pub use update::BookmarkUpdate;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
