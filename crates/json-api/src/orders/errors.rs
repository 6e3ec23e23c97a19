//! Errors

use salvo::http::StatusError;
use tracing::error;

use lanchonete_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::Validation(message) => StatusError::bad_request().brief(message),
        OrdersServiceError::NotFound => {
            StatusError::not_found().brief("Pedido não encontrado")
        }
        OrdersServiceError::Storage(source) => {
            error!("order storage failure: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Time(source) => {
            error!("report window computation failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
