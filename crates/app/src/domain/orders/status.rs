//! Order lifecycle statuses and transition validation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a submitted order.
///
/// The serialized labels are the Portuguese strings the admin and customer
/// frontends render and send back on status updates; they are part of the
/// wire and storage contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Initial status assigned at submission.
    #[serde(rename = "Recebido")]
    Placed,

    #[serde(rename = "Em preparação")]
    Preparing,

    /// Ready for pickup or delivery. Crossing into this status is the only
    /// transition with a notification side effect.
    #[serde(rename = "Pronto para entrega")]
    Ready,

    #[serde(rename = "Entregue")]
    Delivered,

    /// Terminal archival status. Completed orders leave the active ledger
    /// view but stay persisted for reporting.
    #[serde(rename = "Concluído")]
    Completed,
}

impl OrderStatus {
    /// Wire/storage label for this status.
    #[must_use]
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Placed => "Recebido",
            Self::Preparing => "Em preparação",
            Self::Ready => "Pronto para entrega",
            Self::Delivered => "Entregue",
            Self::Completed => "Concluído",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_label())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Recebido" => Ok(Self::Placed),
            "Em preparação" => Ok(Self::Preparing),
            "Pronto para entrega" => Ok(Self::Ready),
            "Entregue" => Ok(Self::Delivered),
            "Concluído" => Ok(Self::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Explicit transition validation.
///
/// Deliberately permissive among the four non-terminal statuses in any
/// direction: an admin reverting a mistaken status is a supported
/// operation. Only the terminal status is fenced off: nothing leaves
/// `Completed`, and `Completed` is reached through the completion
/// operation rather than a status update.
#[must_use]
pub fn transition_allowed(from: OrderStatus, to: OrderStatus) -> bool {
    !from.is_terminal() && !to.is_terminal()
}
