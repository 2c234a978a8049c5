// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Repository fetching crate for Drydock.
//!
//! This crate clones remote git repositories into local working directories
//! by driving the `git` binary, the same way every other VCS interaction in
//! the system works.

pub mod error;
pub mod repo;

pub use error::{FetchError, FetchResult};
pub use repo::{ClonedRepo, clone_repo};
