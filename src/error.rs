use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a server event and the webhook.
///
/// None of these ever reach the host: callers log them and move on.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build webhook payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to send webhook request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook responded with status {0}")]
    UnexpectedStatus(StatusCode),
}

impl WebhookError {
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WebhookError::ConfigIo {
            path: path.into(),
            source,
        }
    }
}
