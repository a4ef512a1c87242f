//! Interactive TUI interface
//!
//! Ratatui-based play mode: tile board, hint-shaded keyboard, message log.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
