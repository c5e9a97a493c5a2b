//! shelfrank-common — Shared configuration and error types used across all Shelfrank crates.

pub mod error;
pub mod settings;
pub mod weights_config;

// Re-export commonly used types
pub use error::{Result, ShelfrankError};
pub use settings::Settings;
pub use weights_config::{FilterConfig, WeightsConfig};
