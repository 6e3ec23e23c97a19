//! Orders service errors.

use thiserror::Error;

use crate::database::StorageError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// Malformed or incomplete submission, or a rejected transition.
    /// Messages are customer/admin facing.
    #[error("{0}")]
    Validation(String),

    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("time computation failed")]
    Time(#[from] jiff::Error),
}
