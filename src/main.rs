//! `shortcut_grid` (sg) - ordered bookmark cards
//!
//! Every command is one change to the grid, written to the data directory
//! before the process exits.

use shortcut_grid::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
