// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Artifact upload crate for Drydock.
//!
//! This crate enumerates the contents of a deploy's working directory and
//! uploads them to an object store. The store itself sits behind the
//! [`ObjectSink`] trait so tests can observe uploads without network access.

pub mod error;
pub mod sink;
pub mod uploader;
pub mod walk;

pub use error::{StoreError, StoreResult};
pub use sink::{ObjectSink, S3Sink};
pub use uploader::{ArtifactUploader, StoreConfig, UploadReport};
pub use walk::walk_entries;
