//! Notifier Config

use clap::Args;

/// Customer notification settings. Notifications are disabled unless both
/// the gateway address and its token are configured.
#[derive(Debug, Args)]
pub struct NotifierConfig {
    /// WhatsApp gateway base URL
    #[arg(long, env = "WHATSAPP_ADDR")]
    pub whatsapp_addr: Option<String>,

    /// WhatsApp gateway API token
    #[arg(long, env = "WHATSAPP_TOKEN")]
    pub whatsapp_token: Option<String>,
}

impl NotifierConfig {
    /// Gateway credentials when notifications are fully configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.whatsapp_addr, &self.whatsapp_token) {
            (Some(addr), Some(token)) => Some((addr.clone(), token.clone())),
            _ => None,
        }
    }
}
