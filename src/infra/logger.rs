// src/infra/logger.rs - Structured logging with tracing
//
// Events go to stderr, except while a `StderrPause` is alive: the dashboard
// owns the screen then, and anything written would land inside the frame.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "BRIGHTSIDE_LOG";

static STDERR_PAUSED: AtomicBool = AtomicBool::new(false);

pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(log_writer)
        .compact()
        .init();
}

fn log_writer() -> Box<dyn Write> {
    if is_paused() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

pub fn is_paused() -> bool {
    STDERR_PAUSED.load(Ordering::Relaxed)
}

/// Discards log output until dropped.
#[must_use]
pub struct StderrPause {
    _private: (),
}

impl StderrPause {
    pub fn new() -> Self {
        STDERR_PAUSED.store(true, Ordering::Relaxed);
        Self { _private: () }
    }
}

impl Default for StderrPause {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StderrPause {
    fn drop(&mut self) {
        STDERR_PAUSED.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_restores_on_drop() {
        assert!(!is_paused());
        {
            let _pause = StderrPause::new();
            assert!(is_paused());
        }
        assert!(!is_paused());
    }
}
