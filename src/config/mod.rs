pub mod loader;
pub mod properties;
pub mod structs;

use std::sync::Arc;

use arc_swap::ArcSwap;
pub use structs::{Config, Settings};

pub const URL_KEY: &str = "webhook-link-indicate";
pub const SERVER_MODE_KEY: &str = "webhook-server-mode-indicate";
pub const ADMIN_DETECTION_KEY: &str = "webhook-admin-detection-toggle";
pub const MESSAGE_TOGGLE_KEY: &str = "webhook-message-sending-toggle";
pub const CONNECTION_TOGGLE_KEY: &str = "webhook-connection-sending-toggle";
pub const DISCONNECTION_TOGGLE_KEY: &str = "webhook-disconnection-sending-toggle";

pub const CONFIG_FILE_NAME: &str = "webhook-chat-sending.properties";

impl Config {
    /// Parses properties text. Keys that are absent come back empty or `false`.
    pub fn from_properties(contents: &str) -> Self {
        let mut config = Config::default();

        for (key, value) in properties::parse(contents) {
            match key.as_str() {
                URL_KEY => config.webhook_url = value,
                SERVER_MODE_KEY => config.server_mode = value,
                ADMIN_DETECTION_KEY => config.admin_detection = value == "true",
                MESSAGE_TOGGLE_KEY => config.message_notify = value == "true",
                CONNECTION_TOGGLE_KEY => config.connect_notify = value == "true",
                DISCONNECTION_TOGGLE_KEY => config.disconnect_notify = value == "true",
                _ => {}
            }
        }

        config
    }

    /// Contents written when the file does not exist yet.
    pub fn default_properties() -> String {
        [
            (URL_KEY, "https://discord.com/api/webhooks/"),
            (SERVER_MODE_KEY, "survival"),
            (ADMIN_DETECTION_KEY, "false"),
            (MESSAGE_TOGGLE_KEY, "false"),
            (CONNECTION_TOGGLE_KEY, "false"),
            (DISCONNECTION_TOGGLE_KEY, "false"),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Holds the active config. Reloads swap in a whole new snapshot.
pub struct ConfigStore {
    current: ArcSwap<Config>,
}

impl ConfigStore {
    pub fn new(config: Config) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
        }
    }

    pub fn snapshot(&self) -> Arc<Config> {
        self.current.load_full()
    }

    pub fn replace(&self, config: Config) {
        self.current.store(Arc::new(config));
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
