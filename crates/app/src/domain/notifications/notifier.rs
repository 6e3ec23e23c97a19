//! Notification dispatcher port.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification request failed")]
    Http(#[from] reqwest::Error),

    #[error("notification gateway rejected the message: {0}")]
    Rejected(String),
}

#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a human-readable message to a customer-supplied contact
    /// address. At-least-attempted-once, no delivery guarantee.
    async fn send(&self, to: &str, message: &str) -> Result<(), NotificationError>;
}

/// Notifier used when no messaging gateway is configured. Drops every
/// message after logging it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, to: &str, message: &str) -> Result<(), NotificationError> {
        debug!(%to, %message, "notification channel disabled, dropping message");

        Ok(())
    }
}
