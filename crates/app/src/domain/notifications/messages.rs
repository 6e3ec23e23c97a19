//! Status message formatting.

use crate::domain::orders::models::ServiceMode;

/// Customer-facing message for the ready-for-pickup-or-delivery boundary,
/// phrased per service mode. These strings are what customers receive on
/// their messaging channel.
#[must_use]
pub fn ready_message(mode: ServiceMode) -> &'static str {
    match mode {
        ServiceMode::Delivery => "Seu pedido saiu e está a caminho!",
        ServiceMode::Pickup => "Seu pedido está pronto para retirada!",
    }
}
