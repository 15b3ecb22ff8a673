// src/lib.rs - Library root for Brightside

pub mod cli;
pub mod infra;
pub mod tui;
