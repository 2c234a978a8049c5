// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Drydock REST API server binary

use clap::Parser;
use dd_logging::{Level, LogFormat, LogLevel, init};
use dd_rest_server::{Server, ServerConfig};
use dd_store::StoreConfig;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address for the server
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Root directory for per-deploy working directories
    #[arg(long, default_value = "./output")]
    output_root: PathBuf,

    /// Destination bucket for uploaded artifacts
    #[arg(long, env = "S3_BUCKET")]
    bucket: String,

    /// Destination object key for uploaded artifacts
    #[arg(long, env = "S3_KEY")]
    key: String,

    /// Enable CORS for development
    #[arg(long)]
    cors: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A local .env file may carry the bucket/key and AWS credentials.
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let default_level: Level = args.log_level.into();
    init("dd-rest-server", default_level, LogFormat::Plaintext)?;

    tracing::info!("Starting Drydock REST API server");

    // Create server configuration
    let config = ServerConfig {
        bind_addr: args.bind,
        output_root: args.output_root,
        enable_cors: args.cors,
        store: StoreConfig {
            bucket: args.bucket,
            key: args.key,
        },
    };

    // Create and start server
    let server = Server::new(config).await?;
    server.run().await?;

    Ok(())
}
