//! Database connection management

use sqlx::PgPool;
use thiserror::Error;

/// Backend-neutral persistence failure.
///
/// Both the durable `PostgreSQL` backends and the in-memory backends report
/// failures through this type; the in-memory variants are infallible and
/// never construct it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Run pending schema migrations.
///
/// # Errors
///
/// Returns an error when a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
