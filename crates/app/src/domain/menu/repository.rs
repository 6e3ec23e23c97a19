//! Durable menu catalog backed by `PostgreSQL`.

use async_trait::async_trait;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::Db,
    domain::menu::{catalog::MenuCatalog, errors::MenuCatalogError, models::MenuItem},
};

const LIST_MENU_ITEMS_SQL: &str = include_str!("sql/list_menu_items.sql");

#[derive(Debug, Clone)]
pub struct PgMenuCatalog {
    db: Db,
}

impl PgMenuCatalog {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuCatalog for PgMenuCatalog {
    async fn list_items(&self) -> Result<Vec<MenuItem>, MenuCatalogError> {
        let items = query_as::<Postgres, MenuItem>(LIST_MENU_ITEMS_SQL)
            .fetch_all(self.db.pool())
            .await
            .map_err(crate::database::StorageError::from)?;

        Ok(items)
    }
}

impl<'r> FromRow<'r, PgRow> for MenuItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("nome")?,
            description: row.try_get("descricao")?,
            price: row.try_get("preco")?,
            image: row.try_get("imagem")?,
            category: row.try_get("categoria")?,
        })
    }
}
