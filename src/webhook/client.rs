use std::time::Duration;

use chrono::Local;
use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tokio::runtime::Handle;

use crate::config::Config;
use crate::error::WebhookError;
use crate::webhook::payload;

/// Sends notifications without ever blocking the caller.
///
/// Each dispatch runs on its own task spawned on `runtime`; nothing joins it,
/// so two quick notifications may reach the endpoint in either order.
#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    runtime: Handle,
}

impl WebhookClient {
    pub fn new(runtime: Handle, timeout: Duration) -> Result<Self, WebhookError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, runtime })
    }

    pub fn with_client(client: Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    pub fn dispatch(&self, config: &Config, message: &str) {
        let content = payload::build_content(&Local::now(), &config.server_mode, message);

        let body = match payload::to_json(content) {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to create a JSON object to send the webhook: {}", e);
                return;
            }
        };

        let client = self.client.clone();
        let webhook_url = config.webhook_url.clone();
        self.runtime.spawn(async move {
            if let Err(e) = send_to_webhook(&client, &webhook_url, body).await {
                error!("An error occurred when sending a webhook message: {}", e);
            }
        });
    }
}

pub async fn send_to_webhook(
    client: &Client,
    webhook_url: &str,
    body: Vec<u8>,
) -> Result<(), WebhookError> {
    let response = client
        .post(webhook_url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    match response.status() {
        StatusCode::NO_CONTENT => {
            info!("Successfully forwarded to webhook");
            Ok(())
        }
        status => Err(WebhookError::UnexpectedStatus(status)),
    }
}
