//! WhatsApp gateway client.
//!
//! Talks to a self-hosted gateway sidecar that owns the WhatsApp session
//! and exposes a small HTTP send API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::notifications::notifier::{NotificationError, Notifier};

/// Configuration for the WhatsApp gateway.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Gateway base address, e.g. `"http://localhost:3002"`.
    pub addr: String,

    /// Bearer token expected by the gateway.
    pub token: String,
}

/// HTTP client for the WhatsApp gateway's send endpoint.
#[derive(Debug, Clone)]
pub struct WhatsAppNotifier {
    config: WhatsAppConfig,
    http: Client,
}

impl WhatsAppNotifier {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: WhatsAppConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    numero: &'a str,
    mensagem: &'a str,
}

#[async_trait]
impl Notifier for WhatsAppNotifier {
    async fn send(&self, to: &str, message: &str) -> Result<(), NotificationError> {
        let url = format!("{}/api/mensagens", self.config.addr);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&SendMessageRequest {
                numero: to,
                mensagem: message,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(NotificationError::Rejected(format!(
                "send request failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}
