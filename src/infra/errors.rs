// src/infra/errors.rs - Error types for Brightside

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrightsideError {
    // Fatal: the dashboard cannot run without an interactive terminal
    #[error("Terminal unavailable: {0}")]
    TerminalInit(String),

    // Recoverable: a collaborator failed, the caller reports and carries on
    #[error("{action} failed: {message}")]
    Action { action: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed error: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrightsideError {
    pub fn action(action: impl Into<String>, message: impl Into<String>) -> Self {
        BrightsideError::Action {
            action: action.into(),
            message: message.into(),
        }
    }
}
