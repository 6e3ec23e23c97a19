//! Durable cart store backed by `PostgreSQL`.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::{
    database::{Db, StorageError},
    domain::carts::{
        models::{CartLine, CartRecord},
        store::CartStore,
    },
};

const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const UPSERT_CART_SQL: &str = include_str!("sql/upsert_cart.sql");
const CLEAR_CART_SQL: &str = include_str!("sql/clear_cart.sql");

/// `PostgreSQL` cart store. Lines are stored as a JSONB array so a full-cart
/// overwrite is a single-row, single-statement upsert.
#[derive(Debug, Clone)]
pub struct PgCartStore {
    db: Db,
}

impl PgCartStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn get(&self, session_id: &str) -> Result<Option<CartRecord>, StorageError> {
        let record = query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(session_id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn upsert(
        &self,
        session_id: &str,
        lines: Vec<CartLine>,
    ) -> Result<CartRecord, StorageError> {
        let record = query_as::<Postgres, CartRecord>(UPSERT_CART_SQL)
            .bind(session_id)
            .bind(Json(lines))
            .fetch_one(self.db.pool())
            .await?;

        Ok(record)
    }

    async fn clear(&self, session_id: &str) -> Result<(), StorageError> {
        query(CLEAR_CART_SQL)
            .bind(session_id)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(lines): Json<Vec<CartLine>> = row.try_get("itens")?;

        Ok(Self {
            session_id: row.try_get("session_id")?,
            lines,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
