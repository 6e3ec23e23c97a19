//! Errors

use salvo::http::StatusError;
use tracing::error;

use lanchonete_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::Storage(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
