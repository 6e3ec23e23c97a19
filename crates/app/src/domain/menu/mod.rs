//! Menu catalog (read-only external collaborator).

pub mod catalog;
pub mod errors;
pub mod models;
mod repository;

pub use catalog::{MemoryMenuCatalog, MenuCatalog, MockMenuCatalog};
pub use errors::MenuCatalogError;
pub use repository::PgMenuCatalog;
