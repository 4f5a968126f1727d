use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};

use crate::config::loader::{ensure_config_file, load_config};
use crate::config::{Config, ConfigStore};
use crate::error::WebhookError;
use crate::events::commands::CommandHandler;
use crate::events::format;
use crate::events::{Player, ServerListener};
use crate::webhook::WebhookClient;

pub const RELOAD_COMMAND: &str = "webhook-reload";

/// Turns server events into webhook notifications.
pub struct NotificationForwarder {
    config_path: PathBuf,
    config: ConfigStore,
    webhook: WebhookClient,
}

impl NotificationForwarder {
    pub fn new(config_path: impl Into<PathBuf>, webhook: WebhookClient) -> Self {
        Self {
            config_path: config_path.into(),
            config: ConfigStore::default(),
            webhook,
        }
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.snapshot()
    }

    /// Re-reads the properties file. On failure the current config stays.
    pub fn reload(&self) -> Result<(), WebhookError> {
        let config = load_config(&self.config_path)?;
        self.config.replace(config);
        Ok(())
    }

    pub fn register_server_commands(self: &Arc<Self>, handler: &mut CommandHandler) {
        let forwarder = Arc::clone(self);
        handler.register(
            RELOAD_COMMAND,
            "Reload the plugin configuration.",
            move |_| match forwarder.reload() {
                Ok(()) => info!(
                    "The configuration of the \"webhook-chat-sending\" plugin has been reloaded."
                ),
                Err(e) => error!("An error occurred while reading the settings file: {}", e),
            },
        );
    }

    fn forward(&self, render: impl FnOnce(&Config) -> Option<String>) {
        let config = self.config.snapshot();
        if let Some(message) = render(&config) {
            self.webhook.dispatch(&config, &message);
        }
    }
}

impl ServerListener for NotificationForwarder {
    fn on_server_load(&self) {
        if let Err(e) = ensure_config_file(&self.config_path) {
            error!("An error occurred while creating the settings file: {}", e);
        }

        match self.reload() {
            Ok(()) => info!("Loaded settings from {}", self.config_path.display()),
            Err(e) => error!("An error occurred while reading the settings file: {}", e),
        }
    }

    fn on_chat(&self, player: &Player, text: &str) {
        self.forward(|config| format::chat_message(config, player, text));
    }

    fn on_join(&self, player: &Player) {
        self.forward(|config| format::join_message(config, player));
    }

    fn on_leave(&self, player: &Player) {
        self.forward(|config| format::leave_message(config, player));
    }
}
