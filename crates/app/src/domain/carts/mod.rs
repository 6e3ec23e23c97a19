//! Session-scoped shopping carts.

pub mod errors;
pub mod models;
mod repository;
pub mod service;
pub mod store;

pub use errors::CartsServiceError;
pub use repository::PgCartStore;
pub use service::*;
pub use store::{CartStore, MemoryCartStore, MockCartStore};
