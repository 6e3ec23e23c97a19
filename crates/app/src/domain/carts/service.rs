//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::carts::{
    errors::CartsServiceError,
    models::{CartLine, CartRecord},
    store::CartStore,
};

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the persisted lines for a session, empty when none exist.
    async fn get_cart(&self, session_id: &str) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Replace a session's persisted cart with the supplied lines.
    ///
    /// Idempotent full overwrite; saving an empty sequence logically
    /// empties the cart without deleting the session's record.
    async fn save_cart(
        &self,
        session_id: &str,
        lines: Vec<CartLine>,
    ) -> Result<CartRecord, CartsServiceError>;
}

/// Production carts service over a pluggable [`CartStore`] backend.
#[derive(Clone)]
pub struct SessionCartsService {
    store: Arc<dyn CartStore>,
}

impl SessionCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn get_cart(&self, session_id: &str) -> Result<Vec<CartLine>, CartsServiceError> {
        let record = self.store.get(session_id).await?;

        Ok(record.map(|record| record.lines).unwrap_or_default())
    }

    async fn save_cart(
        &self,
        session_id: &str,
        lines: Vec<CartLine>,
    ) -> Result<CartRecord, CartsServiceError> {
        let record = self.store.upsert(session_id, normalize(lines)).await?;

        Ok(record)
    }
}

/// Enforce the cart invariants before anything reaches the store: at most
/// one line per menu item (duplicates merge by summing quantities, first
/// occurrence keeps its snapshot) and no line at quantity zero.
fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut merged: Vec<CartLine> = Vec::with_capacity(lines.len());

    for line in lines {
        if line.quantity == 0 {
            continue;
        }

        match merged.iter_mut().find(|m| m.item_id == line.item_id) {
            Some(existing) => existing.quantity += line.quantity,
            None => merged.push(line),
        }
    }

    merged
}
