// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main server implementation

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use dd_store::{ArtifactUploader, ObjectSink, S3Sink};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

/// REST API server
pub struct Server {
    config: ServerConfig,
    app: Router,
}

impl Server {
    /// Create a new server instance backed by the real S3 sink
    pub async fn new(config: ServerConfig) -> ApiResult<Self> {
        let sink: Arc<dyn ObjectSink> = Arc::new(S3Sink::from_env().await);
        let uploader = Arc::new(ArtifactUploader::new(sink, config.store.clone()));
        let state = AppState::new(config.clone(), uploader);
        Self::with_state(config, state)
    }

    /// Construct a server from an already-built app state (used for custom sinks)
    pub fn with_state(config: ServerConfig, state: AppState) -> ApiResult<Self> {
        let app = Self::build_app(state, &config);
        Ok(Self { config, app })
    }

    /// Build the Axum application with routes and middleware
    fn build_app(state: AppState, config: &ServerConfig) -> Router {
        // Build middleware stack
        let middleware_stack = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer({
                if config.enable_cors {
                    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
                } else {
                    CorsLayer::new()
                }
            });

        Router::new()
            .route("/healthz", get(handlers::health::health_check))
            .route("/deploy", post(handlers::deploys::create_deploy))
            .with_state(state)
            .layer(middleware_stack)
    }

    /// Run the server
    pub async fn run(self) -> ApiResult<()> {
        let addr = self.config.bind_addr;
        info!("Starting server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.app)
            .await
            .map_err(|err| ApiError::Internal(format!("REST server error: {err}")))?;

        Ok(())
    }

    /// Get the bind address
    pub fn addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
