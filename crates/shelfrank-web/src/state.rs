//! Shared application state for the web server.

use std::sync::Arc;

use shelfrank_catalog::DataProcessor;
use shelfrank_common::{Settings, WeightsConfig};

/// Shared state injected into every Axum handler. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub processor: DataProcessor,
}

impl AppState {
    pub fn new(settings: Settings, weights: WeightsConfig) -> Self {
        Self { processor: DataProcessor::new(settings, weights) }
    }

    pub fn settings(&self) -> &Settings {
        self.processor.settings()
    }
}

pub type SharedState = Arc<AppState>;
