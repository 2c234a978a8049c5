// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Upload orchestration over a walked directory tree

use crate::error::StoreResult;
use crate::sink::ObjectSink;
use crate::walk::walk_entries;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Object store destination settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Destination bucket for every uploaded object
    pub bucket: String,

    /// Destination key for every uploaded object. Not templated per file:
    /// successive uploads within one invocation overwrite one another, and
    /// only the last-uploaded file's bytes persist at this key.
    pub key: String,
}

/// Outcome of one upload pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReport {
    /// Filesystem entries presented by the walk (root and directories included)
    pub entries: usize,

    /// Regular files actually streamed to the store
    pub uploaded: usize,
}

/// Uploads the contents of a working directory to the configured destination
pub struct ArtifactUploader {
    sink: Arc<dyn ObjectSink>,
    config: StoreConfig,
}

impl ArtifactUploader {
    pub fn new(sink: Arc<dyn ObjectSink>, config: StoreConfig) -> Self {
        Self { sink, config }
    }

    /// Walk `root` and upload each regular file to the configured
    /// bucket/key, fail-fast.
    ///
    /// Every entry the walk discovers is presented exactly once; directory
    /// entries cannot be streamed as object bodies and are skipped. The
    /// first read or upload error aborts the remaining uploads and is
    /// returned to the caller. Entries uploaded before the failure stay
    /// uploaded; there is no rollback.
    pub async fn upload_dir(&self, root: &Path) -> StoreResult<UploadReport> {
        let entries = walk_entries(root)?;

        let mut uploaded = 0usize;
        for path in &entries {
            if !path.is_file() {
                continue;
            }
            self.sink.put_object(&self.config.bucket, &self.config.key, path).await?;
            uploaded += 1;
        }

        debug!(
            entries = entries.len(),
            uploaded,
            bucket = %self.config.bucket,
            "artifact upload complete"
        );

        Ok(UploadReport {
            entries: entries.len(),
            uploaded,
        })
    }
}
