//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use lanchonete_app::domain::carts::models::CartLine;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The menu item identifier
    pub id: i64,

    /// The menu item name, snapshotted when the line was added
    #[serde(rename = "nome")]
    pub name: String,

    /// The unit price as a decimal string, snapshotted when the line was
    /// added
    #[serde(rename = "preco")]
    pub price: String,

    /// The image URL, when available
    #[serde(rename = "imagem")]
    pub image: Option<String>,

    /// The line quantity
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.item_id,
            name: line.name,
            price: line.price.to_string(),
            image: line.image,
            quantity: line.quantity,
        }
    }
}

/// Get Cart Handler
///
/// Returns a session's persisted cart lines, an empty array when the
/// session has no cart yet.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    session_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<CartLineResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let lines = state
        .app
        .carts
        .get_cart(&session_id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(lines.into_iter().map(CartLineResponse::from).collect()))
}
