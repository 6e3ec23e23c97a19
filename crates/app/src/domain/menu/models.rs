//! Menu Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One orderable item from the vendor's menu.
///
/// Immutable from the core's perspective; menu CRUD is an external concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "preco")]
    pub price: Decimal,

    #[serde(rename = "imagem")]
    pub image: Option<String>,

    #[serde(rename = "categoria")]
    pub category: String,
}
