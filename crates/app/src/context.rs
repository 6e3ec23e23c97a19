//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartStore, MemoryCartStore, PgCartStore, SessionCartsService},
        menu::{MemoryMenuCatalog, MenuCatalog, PgMenuCatalog},
        notifications::Notifier,
        orders::{LedgerOrdersService, MemoryOrderLedger, OrderLedger, PgOrderLedger},
    },
};

use crate::domain::{carts::CartsService, orders::OrdersService};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

/// Wired-up domain services shared by the HTTP layer.
#[derive(Clone)]
pub struct AppContext {
    pub menu: Arc<dyn MenuCatalog>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context over the durable `PostgreSQL` backends.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or migrating the database fails.
    pub async fn from_database_url(
        url: &str,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        let db = Db::new(pool);

        Ok(Self::assemble(
            Arc::new(PgMenuCatalog::new(db.clone())),
            Arc::new(PgCartStore::new(db.clone())),
            Arc::new(PgOrderLedger::new(db)),
            notifier,
        ))
    }

    /// Build application context over the in-memory backends. State does
    /// not survive a restart; intended for tests and database-less runs.
    #[must_use]
    pub fn in_memory(notifier: Arc<dyn Notifier>) -> Self {
        Self::assemble(
            Arc::new(MemoryMenuCatalog::default()),
            Arc::new(MemoryCartStore::new()),
            Arc::new(MemoryOrderLedger::new()),
            notifier,
        )
    }

    fn assemble(
        menu: Arc<dyn MenuCatalog>,
        cart_store: Arc<dyn CartStore>,
        ledger: Arc<dyn OrderLedger>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            menu,
            carts: Arc::new(SessionCartsService::new(Arc::clone(&cart_store))),
            orders: Arc::new(LedgerOrdersService::new(ledger, cart_store, notifier)),
        }
    }
}
