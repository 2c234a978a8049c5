// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Filesystem enumeration for upload

use crate::error::StoreResult;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively enumerate every filesystem entry reachable from `root`,
/// including the root itself and directories. Depth-first; no ordering
/// guarantee beyond traversal order. The first enumeration error aborts
/// the walk.
pub fn walk_entries(root: &Path) -> StoreResult<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root) {
        entries.push(entry?.into_path());
    }
    Ok(entries)
}
