//! Complete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Complete Order Handler
///
/// Archives an order under the terminal status. It leaves the active list
/// but stays available to the report.
#[endpoint(
    tags("orders"),
    summary = "Complete Order",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Order completed"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "orders.complete", skip(order, depot), err)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = order.into_inner();

    state
        .app
        .orders
        .complete_order(order)
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_uuid = %order, "order completed");

    Ok(StatusCode::NO_CONTENT)
}
