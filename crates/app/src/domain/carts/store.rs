//! Cart Store port.
//!
//! Keyed persistence of a session's pending item selections. The session
//! identifier is an opaque client-generated bearer token; access is strictly
//! per-key, with last-write-wins semantics and no concurrency token.
//! Concurrent tabs sharing one session id can clobber each other's edits;
//! a single browser tab is the expected writer.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::StorageError,
    domain::carts::models::{CartLine, CartRecord},
};

#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetch the persisted cart for a session, `None` when the session has
    /// never saved one. Absence is not an error.
    async fn get(&self, session_id: &str) -> Result<Option<CartRecord>, StorageError>;

    /// Replace the entire persisted line set for a session, creating the
    /// record when missing and refreshing its modification timestamp.
    async fn upsert(
        &self,
        session_id: &str,
        lines: Vec<CartLine>,
    ) -> Result<CartRecord, StorageError>;

    /// Logically empty a session's cart without deleting its record.
    /// A no-op for unknown sessions.
    async fn clear(&self, session_id: &str) -> Result<(), StorageError>;
}

/// In-memory cart store.
///
/// The pluggable non-durable backend: used by tests and by deployments
/// running without a database. State is lost on process exit.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    carts: RwLock<HashMap<String, CartRecord>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn get(&self, session_id: &str) -> Result<Option<CartRecord>, StorageError> {
        let carts = self.carts.read().unwrap_or_else(PoisonError::into_inner);

        Ok(carts.get(session_id).cloned())
    }

    async fn upsert(
        &self,
        session_id: &str,
        lines: Vec<CartLine>,
    ) -> Result<CartRecord, StorageError> {
        let mut carts = self.carts.write().unwrap_or_else(PoisonError::into_inner);
        let now = Timestamp::now();

        let record = carts
            .entry(session_id.to_string())
            .and_modify(|record| {
                record.lines = lines.clone();
                record.updated_at = now;
            })
            .or_insert_with(|| CartRecord {
                session_id: session_id.to_string(),
                lines,
                created_at: now,
                updated_at: now,
            });

        Ok(record.clone())
    }

    async fn clear(&self, session_id: &str) -> Result<(), StorageError> {
        let mut carts = self.carts.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(record) = carts.get_mut(session_id) {
            record.lines.clear();
            record.updated_at = Timestamp::now();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn line(item_id: i64, quantity: u32) -> CartLine {
        CartLine {
            item_id,
            name: format!("item {item_id}"),
            price: Decimal::new(10_00, 2),
            image: None,
            quantity,
        }
    }

    #[tokio::test]
    async fn get_missing_session_returns_none() -> TestResult {
        let store = MemoryCartStore::new();

        assert!(store.get("missing").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn upsert_creates_then_overwrites() -> TestResult {
        let store = MemoryCartStore::new();

        let created = store.upsert("s1", vec![line(1, 2)]).await?;
        assert_eq!(created.lines.len(), 1);

        let replaced = store.upsert("s1", vec![line(2, 1), line(3, 1)]).await?;
        assert_eq!(replaced.lines.len(), 2);
        assert_eq!(replaced.created_at, created.created_at);

        let fetched = store.get("s1").await?.expect("cart should exist");
        assert_eq!(fetched.lines, replaced.lines);

        Ok(())
    }

    #[tokio::test]
    async fn clear_empties_but_keeps_record() -> TestResult {
        let store = MemoryCartStore::new();

        store.upsert("s1", vec![line(1, 2)]).await?;
        store.clear("s1").await?;

        let record = store.get("s1").await?.expect("record should survive clear");
        assert!(record.lines.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn clear_unknown_session_is_noop() -> TestResult {
        let store = MemoryCartStore::new();

        store.clear("missing").await?;

        assert!(store.get("missing").await?.is_none());

        Ok(())
    }
}
