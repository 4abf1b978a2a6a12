//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, MessageLog, run_tui};
