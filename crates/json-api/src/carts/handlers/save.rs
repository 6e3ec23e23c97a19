//! Save Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use lanchonete_app::domain::carts::models::{CartLine, CartRecord};

use crate::{
    carts::{errors::into_status_error, get::CartLineResponse},
    extensions::*,
    state::State,
};

/// Cart Line Body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineBody {
    /// The menu item identifier
    pub id: i64,

    /// The menu item name snapshot
    #[serde(rename = "nome")]
    pub name: String,

    /// The unit price snapshot as a decimal string
    #[serde(rename = "preco")]
    pub price: String,

    /// The image URL, when available
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,

    /// The line quantity
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

impl CartLineBody {
    pub(crate) fn into_line(self) -> Result<CartLine, rust_decimal::Error> {
        Ok(CartLine {
            item_id: self.id,
            name: self.name,
            price: self.price.parse()?,
            image: self.image,
            quantity: self.quantity,
        })
    }
}

/// Save Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaveCartRequest {
    /// The session the cart belongs to
    #[serde(rename = "sessionId")]
    pub session_id: String,

    /// The full set of cart lines, replacing whatever was stored
    #[serde(rename = "itens")]
    pub lines: Vec<CartLineBody>,
}

/// Cart Record Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartRecordResponse {
    /// The session the cart belongs to
    #[serde(rename = "sessionId")]
    pub session_id: String,

    /// The persisted cart lines
    #[serde(rename = "itens")]
    pub lines: Vec<CartLineResponse>,

    /// The date and time the cart was created
    #[serde(rename = "criadoEm")]
    pub created_at: String,

    /// The date and time the cart was last updated
    #[serde(rename = "atualizadoEm")]
    pub updated_at: String,
}

impl From<CartRecord> for CartRecordResponse {
    fn from(record: CartRecord) -> Self {
        Self {
            session_id: record.session_id,
            lines: record
                .lines
                .into_iter()
                .map(CartLineResponse::from)
                .collect(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

/// Save Cart Handler
///
/// Replaces the session's persisted cart with the supplied lines. Saving
/// an empty set of lines empties the cart.
#[endpoint(
    tags("carts"),
    summary = "Save Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SaveCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartRecordResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let lines = request
        .lines
        .into_iter()
        .map(CartLineBody::into_line)
        .collect::<Result<Vec<_>, _>>()
        .or_400("preço inválido")?;

    let record = state
        .app
        .carts
        .save_cart(&request.session_id, lines)
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}
