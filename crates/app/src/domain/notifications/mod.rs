//! Outbound customer notifications.
//!
//! Best-effort side path: dispatch happens after the triggering status
//! persist succeeds, outcomes are observed only for logging, and failures
//! never propagate to the caller.

pub mod messages;
pub mod notifier;
mod whatsapp;

pub use messages::ready_message;
pub use notifier::{MockNotifier, NoopNotifier, NotificationError, Notifier};
pub use whatsapp::{WhatsAppConfig, WhatsAppNotifier};
