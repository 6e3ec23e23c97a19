//! Orders Report Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use lanchonete_app::domain::orders::{OrderStatus, OrdersReport, ReportFilter, ReportPeriod};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, index::OrderResponse},
    state::State,
};

/// Report Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReportResponse {
    /// The orders matching the filter, newest first
    #[serde(rename = "pedidos")]
    pub orders: Vec<OrderResponse>,

    /// How many orders matched
    #[serde(rename = "totalPedidos")]
    pub count: usize,

    /// The summed revenue as a decimal string
    #[serde(rename = "faturamento")]
    pub revenue: String,

    /// The period the report covers
    #[serde(rename = "periodo")]
    pub period: String,
}

impl From<OrdersReport> for ReportResponse {
    fn from(report: OrdersReport) -> Self {
        Self {
            orders: report
                .orders
                .into_iter()
                .map(OrderResponse::from)
                .collect(),
            count: report.count,
            revenue: format!("{:.2}", report.revenue),
            period: report.period.wire_label().to_string(),
        }
    }
}

/// Orders Report Handler
///
/// Aggregates orders of every status, completed included, over the
/// requested period.
#[endpoint(tags("orders"), summary = "Orders Report")]
pub(crate) async fn handler(
    periodo: QueryParam<String, false>,
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ReportResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let period = match periodo.into_inner() {
        Some(raw) => raw.parse::<ReportPeriod>().or_400("período inválido")?,
        None => ReportPeriod::default(),
    };

    let status = match status.into_inner() {
        Some(raw) if !raw.is_empty() && raw != "todos" => {
            Some(raw.parse::<OrderStatus>().or_400("status inválido")?)
        }
        _ => None,
    };

    let report = state
        .app
        .orders
        .report(ReportFilter { period, status })
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}
