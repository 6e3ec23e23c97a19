//! Depot access helpers shared by the HTTP handlers.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

/// Extraction shortcuts for state injected into the request depot.
pub(crate) trait DepotExt {
    /// Obtain the injected value of type `T`, answering 500 when the router
    /// never stored one.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
