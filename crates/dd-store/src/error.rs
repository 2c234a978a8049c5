// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Store error types

use std::path::PathBuf;

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced while enumerating or uploading artifacts
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to enumerate artifacts: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("failed to upload {}: {message}", .path.display())]
    Upload { path: PathBuf, message: String },
}
