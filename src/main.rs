use std::env;
use std::sync::Arc;

use log::info;
use tokio::io::BufReader;
use tokio::runtime::Handle;
use webhook_chat_sending::config::loader::load_settings;
use webhook_chat_sending::events::commands::CommandHandler;
use webhook_chat_sending::events::console;
use webhook_chat_sending::webhook::WebhookClient;
use webhook_chat_sending::NotificationForwarder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();
    info!("Starting webhook-chat-sending...");

    let webhook = WebhookClient::new(Handle::current(), settings.http_timeout)?;
    let forwarder = Arc::new(NotificationForwarder::new(settings.config_path, webhook));

    let mut commands = CommandHandler::new();
    forwarder.register_server_commands(&mut commands);

    console::run(BufReader::new(tokio::io::stdin()), &*forwarder, &commands).await?;

    Ok(())
}
