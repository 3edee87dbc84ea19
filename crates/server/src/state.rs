use std::sync::Arc;

use boothtrack_core::{Config, OrderPipeline, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    pipeline: Arc<OrderPipeline>,
}

impl AppState {
    pub fn new(config: Config, pipeline: Arc<OrderPipeline>) -> Self {
        Self { config, pipeline }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    /// Order ingestion pipeline. Every request re-runs it; nothing is cached.
    pub fn pipeline(&self) -> &OrderPipeline {
        self.pipeline.as_ref()
    }
}
