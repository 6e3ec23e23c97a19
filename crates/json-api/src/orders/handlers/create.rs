//! Create Order Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use lanchonete_app::domain::orders::models::{Customer, NewOrder};

use crate::{
    carts::save::CartLineBody,
    extensions::*,
    orders::{errors::into_status_error, index::OrderResponse},
    state::State,
};

/// Customer Body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerBody {
    /// The customer name
    #[serde(rename = "nome")]
    pub name: String,

    /// The messaging-channel contact address
    #[serde(rename = "contato")]
    pub contact: String,

    /// The service mode, `entrega` or `retirada`
    #[serde(rename = "servico")]
    pub service_mode: String,

    /// The delivery address, required for delivery orders
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,

    /// The payment method, `dinheiro`, `cartao` or `pix`
    #[serde(rename = "pagamento")]
    pub payment: String,

    /// The change-due amount as a decimal string, required for cash
    #[serde(rename = "trocoPara", default)]
    pub change_for: Option<String>,
}

impl CustomerBody {
    fn into_customer(self) -> Result<Customer, StatusError> {
        Ok(Customer {
            name: self.name,
            contact: self.contact,
            service_mode: self.service_mode.parse().or_400("serviço inválido")?,
            address: self.address,
            payment: self.payment.parse().or_400("pagamento inválido")?,
            change_for: self
                .change_for
                .map(|amount| amount.parse())
                .transpose()
                .or_400("troco inválido")?,
        })
    }
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// The customer captured at checkout
    #[serde(rename = "cliente")]
    pub customer: CustomerBody,

    /// The ordered lines
    #[serde(rename = "itens")]
    pub lines: Vec<CartLineBody>,

    /// The client-computed total as a decimal string
    pub total: String,

    /// The client-side submission time, ISO 8601
    #[serde(rename = "data", default)]
    pub created_at: Option<String>,

    /// The session whose cart should be cleared after submission
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    /// Confirmation message
    pub message: String,

    /// The persisted order
    #[serde(rename = "pedido")]
    pub order: OrderResponse,
}

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "orders.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let customer = request.customer.into_customer()?;

    let lines = request
        .lines
        .into_iter()
        .map(CartLineBody::into_line)
        .collect::<Result<Vec<_>, _>>()
        .or_400("preço inválido")?;

    let total = request.total.parse().or_400("total inválido")?;

    let created_at = request
        .created_at
        .map(|raw| raw.parse::<Timestamp>())
        .transpose()
        .or_400("data inválida")?;

    let order = state
        .app
        .orders
        .submit_order(NewOrder {
            customer,
            lines,
            total,
            created_at,
            session_id: request.session_id,
        })
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_uuid = %order.uuid, "order placed");

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse {
        message: "Pedido recebido com sucesso!".to_string(),
        order: order.into(),
    }))
}
