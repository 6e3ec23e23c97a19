//! List Orders Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lanchonete_app::domain::orders::models::{Customer, Order};

use crate::{
    carts::get::CartLineResponse, extensions::*, orders::errors::into_status_error, state::State,
};

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// The customer name
    #[serde(rename = "nome")]
    pub name: String,

    /// The messaging-channel contact address
    #[serde(rename = "contato")]
    pub contact: String,

    /// The service mode, `entrega` or `retirada`
    #[serde(rename = "servico")]
    pub service_mode: String,

    /// The delivery address, present for delivery orders
    #[serde(rename = "endereco", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The payment method, `dinheiro`, `cartao` or `pix`
    #[serde(rename = "pagamento")]
    pub payment: String,

    /// The change-due amount as a decimal string, present for cash payments
    #[serde(rename = "trocoPara", skip_serializing_if = "Option::is_none")]
    pub change_for: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            name: customer.name,
            contact: customer.contact,
            service_mode: customer.service_mode.wire_label().to_string(),
            address: customer.address,
            payment: customer.payment.wire_label().to_string(),
            change_for: customer.change_for.map(|amount| amount.to_string()),
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub id: Uuid,

    /// The customer captured at checkout
    #[serde(rename = "cliente")]
    pub customer: CustomerResponse,

    /// The ordered lines
    #[serde(rename = "itens")]
    pub lines: Vec<CartLineResponse>,

    /// The order total as a decimal string
    pub total: String,

    /// The current status label
    pub status: String,

    /// The date and time the order was placed
    #[serde(rename = "data")]
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.uuid,
            customer: order.customer.into(),
            lines: order
                .lines
                .into_iter()
                .map(CartLineResponse::from)
                .collect(),
            total: order.total.to_string(),
            status: order.status.wire_label().to_string(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// List Orders Handler
///
/// Returns every active order, newest first. Completed orders only appear
/// in the report.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
