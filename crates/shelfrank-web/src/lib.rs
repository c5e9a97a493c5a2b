//! shelfrank-web — read-only HTTP API over the catalog ranking.
//!   - Ranked products, served from the processed file or scored on the fly
//!   - Raw product details by name
//!   - Liveness probe

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
