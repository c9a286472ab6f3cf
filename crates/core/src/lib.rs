//! Domain logic for the souk storefront.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! the session cart aggregator, money arithmetic, catalog/order/review
//! validation, and the common error taxonomy.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod review;
pub mod roles;
pub mod types;
