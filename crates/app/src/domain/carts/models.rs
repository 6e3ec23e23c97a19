//! Cart Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One menu item and its requested quantity within a cart or order.
///
/// Name, price and image are denormalized snapshots taken when the item was
/// added; they are not re-validated against the live catalog. Field names
/// follow the wire/storage contract the frontends depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Menu item identifier.
    #[serde(rename = "id")]
    pub item_id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "preco")]
    pub price: Decimal,

    #[serde(rename = "imagem")]
    pub image: Option<String>,

    /// Requested quantity. Never persisted at zero.
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

/// Persisted cart record for one anonymous session.
#[derive(Debug, Clone)]
pub struct CartRecord {
    pub session_id: String,
    pub lines: Vec<CartLine>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
