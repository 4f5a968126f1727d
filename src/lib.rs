pub mod config;
pub mod error;
pub mod events;
pub mod forwarder;
pub mod webhook;

pub use error::WebhookError;
pub use forwarder::NotificationForwarder;
