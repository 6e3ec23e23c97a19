//! Lanchonete domain concerns.

pub mod carts;
pub mod menu;
pub mod notifications;
pub mod orders;
