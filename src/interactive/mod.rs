//! Interactive TUI ladder explorer

mod app;
mod rendering;

pub use app::{App, HISTORY_LIMIT, run_tui};
