//! Menu catalog errors.

use thiserror::Error;

use crate::database::StorageError;

#[derive(Debug, Error)]
pub enum MenuCatalogError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}
