//! Durable order ledger backed by `PostgreSQL`.

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, types::Json};
use uuid::Uuid;

use crate::{
    database::{Db, StorageError},
    domain::{
        carts::models::CartLine,
        orders::{
            ledger::OrderLedger,
            models::{Customer, Order},
            status::OrderStatus,
        },
    },
};

const INSERT_ORDER_SQL: &str = include_str!("sql/insert_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ACTIVE_ORDERS_SQL: &str = include_str!("sql/list_active_orders.sql");
const LIST_ORDERS_SINCE_SQL: &str = include_str!("sql/list_orders_since.sql");
const SET_ORDER_STATUS_SQL: &str = include_str!("sql/set_order_status.sql");

#[derive(Debug, Clone)]
pub struct PgOrderLedger {
    db: Db,
}

impl PgOrderLedger {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderLedger for PgOrderLedger {
    async fn insert(&self, order: Order) -> Result<(), StorageError> {
        query(INSERT_ORDER_SQL)
            .bind(order.uuid)
            .bind(Json(&order.customer))
            .bind(Json(&order.lines))
            .bind(order.total)
            .bind(order.status.wire_label())
            .bind(SqlxTimestamp::from(order.created_at))
            .execute(self.db.pool())
            .await?;

        Ok(())
    }

    async fn get(&self, uuid: Uuid) -> Result<Option<Order>, StorageError> {
        let order = query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(uuid)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(order)
    }

    async fn list_active(&self) -> Result<Vec<Order>, StorageError> {
        let orders = query_as::<Postgres, Order>(LIST_ACTIVE_ORDERS_SQL)
            .bind(OrderStatus::Completed.wire_label())
            .fetch_all(self.db.pool())
            .await?;

        Ok(orders)
    }

    async fn list_since(&self, since: Option<Timestamp>) -> Result<Vec<Order>, StorageError> {
        let orders = query_as::<Postgres, Order>(LIST_ORDERS_SINCE_SQL)
            .bind(since.map(SqlxTimestamp::from))
            .fetch_all(self.db.pool())
            .await?;

        Ok(orders)
    }

    async fn set_status(
        &self,
        uuid: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StorageError> {
        let order = query_as::<Postgres, Order>(SET_ORDER_STATUS_SQL)
            .bind(uuid)
            .bind(status.wire_label())
            .fetch_optional(self.db.pool())
            .await?;

        Ok(order)
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(customer): Json<Customer> = row.try_get("cliente")?;
        let Json(lines): Json<Vec<CartLine>> = row.try_get("itens")?;

        let status_label: String = row.try_get("status")?;
        let status = status_label
            .parse::<OrderStatus>()
            .map_err(|source| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(source),
            })?;

        Ok(Self {
            uuid: row.try_get("uuid")?,
            customer,
            lines,
            total: row.try_get("total")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
