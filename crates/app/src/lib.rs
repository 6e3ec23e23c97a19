//! Shared application domain and persistence modules for the lanchonete
//! ordering backend.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
