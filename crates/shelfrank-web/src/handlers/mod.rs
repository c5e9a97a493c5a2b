//! HTTP handlers for all web routes.

pub mod products;
pub mod system;
