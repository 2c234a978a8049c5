//! Server state management

use crate::config::ServerConfig;
use dd_store::ArtifactUploader;
use std::sync::Arc;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,

    /// Upload pipeline shared by every request
    pub uploader: Arc<ArtifactUploader>,
}

impl AppState {
    /// Create new app state
    pub fn new(config: ServerConfig, uploader: Arc<ArtifactUploader>) -> Self {
        Self { config, uploader }
    }

    /// Get configuration reference
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
