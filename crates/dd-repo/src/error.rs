// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Fetch error types

/// Fetch result type
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors produced while fetching a repository
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The `git` binary could not be started at all
    #[error("failed to launch git: {0}")]
    Spawn(#[source] std::io::Error),

    /// The clone ran and failed; `message` carries git's trailing stderr
    #[error("cloning failed: {message}")]
    CloneFailed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
