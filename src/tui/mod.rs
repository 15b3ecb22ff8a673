// src/tui/mod.rs - Terminal dashboard.
//
// Launch via `brightside jack`.

pub mod app;
pub mod keys;
pub mod state;
pub mod theme;

pub use app::run_dashboard;
