//! Request extractors: authentication, role checks, and the cart token.

pub mod auth;
pub mod cart;
pub mod rbac;
