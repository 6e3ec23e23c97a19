//! Order Handlers

pub(crate) mod complete;
pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod report;
pub(crate) mod update_status;
