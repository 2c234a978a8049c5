// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Object store sink interface and the S3 implementation

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

/// Destination for uploaded objects
#[async_trait]
pub trait ObjectSink: Send + Sync {
    /// Upload the file at `path` as a single object at `bucket`/`key`
    async fn put_object(&self, bucket: &str, key: &str, path: &Path) -> StoreResult<()>;
}

/// `ObjectSink` backed by Amazon S3
pub struct S3Sink {
    client: aws_sdk_s3::Client,
}

impl S3Sink {
    /// Build a sink from the SDK's default credential and region chain
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
        }
    }

    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectSink for S3Sink {
    async fn put_object(&self, bucket: &str, key: &str, path: &Path) -> StoreResult<()> {
        let body = ByteStream::from_path(path).await.map_err(|err| StoreError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|err| StoreError::Upload {
                path: path.to_path_buf(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(())
    }
}
