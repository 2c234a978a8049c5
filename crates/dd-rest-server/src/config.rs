// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Server configuration

use dd_store::StoreConfig;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration
///
/// Built once in `main` and handed to the components that need it at
/// construction time; nothing reads the process environment after startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,

    /// Root directory under which per-deploy working directories are
    /// allocated. Working directories are never removed.
    pub output_root: PathBuf,

    /// Enable CORS headers for development
    pub enable_cors: bool,

    /// Object store destination for uploaded artifacts
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().expect("valid socket address"),
            output_root: PathBuf::from("./output"),
            enable_cors: false,
            store: StoreConfig {
                bucket: String::new(),
                key: String::new(),
            },
        }
    }
}
