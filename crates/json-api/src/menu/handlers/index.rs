//! List Menu Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use lanchonete_app::domain::menu::models::MenuItem;

use crate::{extensions::*, menu::errors::into_status_error, state::State};

/// Menu Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MenuItemResponse {
    /// The numeric identifier of the menu item
    pub id: i64,

    /// The display name of the menu item
    #[serde(rename = "nome")]
    pub name: String,

    /// The menu item description
    #[serde(rename = "descricao")]
    pub description: String,

    /// The unit price as a decimal string
    #[serde(rename = "preco")]
    pub price: String,

    /// The image URL, when available
    #[serde(rename = "imagem")]
    pub image: Option<String>,

    /// The menu category
    #[serde(rename = "categoria")]
    pub category: String,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price.to_string(),
            image: item.image,
            category: item.category,
        }
    }
}

/// List Menu Handler
///
/// Returns every menu item, ordered by identifier.
#[endpoint(tags("menu"), summary = "List Menu Items")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<MenuItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .menu
        .list_items()
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(MenuItemResponse::from).collect()))
}
