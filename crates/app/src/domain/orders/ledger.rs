//! Order Ledger port.
//!
//! Append-create, status-mutable collection of submitted orders. Access is
//! strictly by primary key; no cross-record transactions are required.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use uuid::Uuid;

use crate::{
    database::StorageError,
    domain::orders::{models::Order, status::OrderStatus},
};

#[automock]
#[async_trait]
pub trait OrderLedger: Send + Sync {
    /// Append a new order. The identifier is assigned by the caller and
    /// must be fresh.
    async fn insert(&self, order: Order) -> Result<(), StorageError>;

    async fn get(&self, uuid: Uuid) -> Result<Option<Order>, StorageError>;

    /// Active (non-completed) orders, newest first.
    async fn list_active(&self) -> Result<Vec<Order>, StorageError>;

    /// Orders of every status, completed included, newest first,
    /// optionally bounded below by creation time. Reporting view.
    async fn list_since(&self, since: Option<Timestamp>) -> Result<Vec<Order>, StorageError>;

    /// Persist a new status, returning the updated order or `None` when
    /// the identifier is unknown.
    async fn set_status(
        &self,
        uuid: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StorageError>;
}

/// In-memory order ledger, the non-durable pluggable backend.
#[derive(Debug, Default)]
pub struct MemoryOrderLedger {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl OrderLedger for MemoryOrderLedger {
    async fn insert(&self, order: Order) -> Result<(), StorageError> {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);

        orders.push(order);

        Ok(())
    }

    async fn get(&self, uuid: Uuid) -> Result<Option<Order>, StorageError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);

        Ok(orders.iter().find(|order| order.uuid == uuid).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Order>, StorageError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);

        let mut active: Vec<Order> = orders
            .iter()
            .filter(|order| !order.status.is_terminal())
            .cloned()
            .collect();

        newest_first(&mut active);

        Ok(active)
    }

    async fn list_since(&self, since: Option<Timestamp>) -> Result<Vec<Order>, StorageError> {
        let orders = self.orders.read().unwrap_or_else(PoisonError::into_inner);

        let mut matching: Vec<Order> = orders
            .iter()
            .filter(|order| since.is_none_or(|bound| order.created_at >= bound))
            .cloned()
            .collect();

        newest_first(&mut matching);

        Ok(matching)
    }

    async fn set_status(
        &self,
        uuid: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StorageError> {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);

        let Some(order) = orders.iter_mut().find(|order| order.uuid == uuid) else {
            return Ok(None);
        };

        order.status = status;

        Ok(Some(order.clone()))
    }
}
