//! Errors

use salvo::http::StatusError;
use tracing::error;

use lanchonete_app::domain::menu::MenuCatalogError;

pub(crate) fn into_status_error(error: MenuCatalogError) -> StatusError {
    match error {
        MenuCatalogError::Storage(source) => {
            error!("failed to load menu: {source}");

            StatusError::internal_server_error()
        }
    }
}
