//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lanchonete_app::domain::orders::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, index::OrderResponse},
    state::State,
};

/// Update Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// The target status label
    pub status: String,
}

/// Order Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderUpdatedResponse {
    /// Confirmation message
    pub message: String,

    /// The order after the update
    #[serde(rename = "pedido")]
    pub order: OrderResponse,
}

/// Update Order Status Handler
///
/// Moves an order to another preparation status. Reaching "Pronto para
/// entrega" triggers the customer notification.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "orders.update_status", skip(order, json, depot), err)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status: OrderStatus = json
        .into_inner()
        .status
        .parse()
        .or_400("status inválido")?;

    let order = state
        .app
        .orders
        .update_status(order.into_inner(), status)
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_uuid = %order.uuid, status = %order.status, "order status updated");

    Ok(Json(OrderUpdatedResponse {
        message: "Status atualizado com sucesso!".to_string(),
        order: order.into(),
    }))
}
