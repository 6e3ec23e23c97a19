//! Order Models

use std::str::FromStr;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{carts::models::CartLine, orders::status::OrderStatus};

/// How the customer receives the order, chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceMode {
    #[serde(rename = "entrega")]
    Delivery,

    #[serde(rename = "retirada")]
    Pickup,
}

impl ServiceMode {
    #[must_use]
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Delivery => "entrega",
            Self::Pickup => "retirada",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown service mode: {0}")]
pub struct UnknownServiceMode(String);

impl FromStr for ServiceMode {
    type Err = UnknownServiceMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrega" => Ok(Self::Delivery),
            "retirada" => Ok(Self::Pickup),
            other => Err(UnknownServiceMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "dinheiro")]
    Cash,

    #[serde(rename = "cartao")]
    Card,

    #[serde(rename = "pix")]
    InstantTransfer,
}

impl PaymentMethod {
    #[must_use]
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Cash => "dinheiro",
            Self::Card => "cartao",
            Self::InstantTransfer => "pix",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dinheiro" => Ok(Self::Cash),
            "cartao" => Ok(Self::Card),
            "pix" => Ok(Self::InstantTransfer),
            other => Err(UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// Customer record captured at checkout. Wire/storage field names are the
/// Portuguese labels the frontends send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "nome")]
    pub name: String,

    /// Messaging-channel contact address.
    #[serde(rename = "contato")]
    pub contact: String,

    #[serde(rename = "servico")]
    pub service_mode: ServiceMode,

    /// Required iff `service_mode` is delivery.
    #[serde(rename = "endereco", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "pagamento")]
    pub payment: PaymentMethod,

    /// Change-due amount, present iff paying cash.
    #[serde(rename = "trocoPara", skip_serializing_if = "Option::is_none")]
    pub change_for: Option<Decimal>,
}

/// A submitted order. Line items and total are fixed at submission; only
/// the status mutates afterwards. Orders hold no back-reference to the cart
/// that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub uuid: Uuid,
    pub customer: Customer,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// Submission payload handed to the orders service.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: Customer,
    pub lines: Vec<CartLine>,

    /// Client-computed total; validated against the line items.
    pub total: Decimal,

    /// Client-side submission time, used as the creation timestamp when
    /// present.
    pub created_at: Option<Timestamp>,

    /// Session whose cart should be cleared after a successful submission.
    pub session_id: Option<String>,
}
