use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::WebhookError;

pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub content: String,
}

/// `[timestamp] [server mode] message`
pub fn build_content(timestamp: &DateTime<Local>, server_mode: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}",
        timestamp.format(TIMESTAMP_FORMAT),
        server_mode,
        message
    )
}

pub fn to_json(content: String) -> Result<Vec<u8>, WebhookError> {
    Ok(serde_json::to_vec(&WebhookPayload { content })?)
}
