use std::path::PathBuf;
use std::time::Duration;

/// Snapshot of `webhook-chat-sending.properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub webhook_url: String,
    pub server_mode: String,
    pub admin_detection: bool,
    pub message_notify: bool,
    pub connect_notify: bool,
    pub disconnect_notify: bool,
}

/// Process level settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub http_timeout: Duration,
}
