//! Submitted orders and their lifecycle.

pub mod errors;
pub mod ledger;
pub mod models;
mod repository;
pub mod report;
pub mod service;
pub mod status;

pub use errors::OrdersServiceError;
pub use ledger::{MemoryOrderLedger, MockOrderLedger, OrderLedger};
pub use report::{OrdersReport, ReportFilter, ReportPeriod};
pub use repository::PgOrderLedger;
pub use service::*;
pub use status::OrderStatus;
