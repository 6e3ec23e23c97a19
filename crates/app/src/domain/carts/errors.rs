//! Carts service errors.

use thiserror::Error;

use crate::database::StorageError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("storage error")]
    Storage(#[from] StorageError),
}
