// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Drydock REST API server
//!
//! This crate implements the deploy-trigger HTTP service: `POST /deploy`
//! clones a remote git repository into a per-request working directory and
//! uploads the cloned files to the configured object store, answering with
//! a generated deployment identifier.

pub mod config;
pub mod deploy_id;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::Server;
pub use state::AppState;
