//! Menu catalog port.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use mockall::automock;

use crate::domain::menu::{errors::MenuCatalogError, models::MenuItem};

#[automock]
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    /// All orderable items, in stable identifier order.
    async fn list_items(&self) -> Result<Vec<MenuItem>, MenuCatalogError>;
}

/// In-memory catalog, seeded up front. Used by tests and database-less
/// deployments.
#[derive(Debug, Default)]
pub struct MemoryMenuCatalog {
    items: RwLock<Vec<MenuItem>>,
}

impl MemoryMenuCatalog {
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl MenuCatalog for MemoryMenuCatalog {
    async fn list_items(&self) -> Result<Vec<MenuItem>, MenuCatalogError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);

        let mut items = items.clone();
        items.sort_by_key(|item| item.id);

        Ok(items)
    }
}
