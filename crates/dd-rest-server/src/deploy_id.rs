// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Deployment identifier generation and working-directory allocation

use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the identifier returned to deploy callers
pub const DEPLOY_ID_LEN: usize = 6;

// Redraws before giving up on an unallocated identifier.
const ALLOC_ATTEMPTS: usize = 8;

/// Random identifier of `length` characters, each drawn independently and
/// uniformly from `[a-zA-Z0-9]`. Not cryptographically strong. Cannot fail.
pub fn deploy_id(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length).map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char).collect()
}

/// Allocate a fresh identifier and its working directory under
/// `output_root`.
///
/// The directory is created with create-new semantics, so two concurrent
/// requests can never be handed the same path; an identifier whose
/// directory already exists is redrawn. The allocated directory is empty
/// and is never removed by the server.
pub async fn allocate_workdir(output_root: &Path) -> io::Result<(String, PathBuf)> {
    tokio::fs::create_dir_all(output_root).await?;

    for _ in 0..ALLOC_ATTEMPTS {
        let id = deploy_id(DEPLOY_ID_LEN);
        let dir = output_root.join(&id);
        match tokio::fs::create_dir(&dir).await {
            Ok(()) => return Ok((id, dir)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::Other,
        "exhausted deploy identifier attempts",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_deploy_id_length() {
        for len in [0, 1, 6, 32] {
            assert_eq!(deploy_id(len).len(), len);
        }
    }

    #[test]
    fn test_deploy_id_alphabet() {
        let id = deploy_id(256);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_deploy_id_collision_rate() {
        // 10,000 six-character draws from a 62^6 space: collisions should
        // track the birthday bound, i.e. essentially never happen.
        let ids: HashSet<String> = (0..10_000).map(|_| deploy_id(DEPLOY_ID_LEN)).collect();
        assert!(ids.len() >= 9_999);
    }

    #[tokio::test]
    async fn test_allocate_creates_empty_directory() {
        let root = TempDir::new().unwrap();
        let output_root = root.path().join("output");

        let (id, dir) = allocate_workdir(&output_root).await.unwrap();

        assert_eq!(id.len(), DEPLOY_ID_LEN);
        assert_eq!(dir, output_root.join(&id));
        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_allocations_are_distinct() {
        let root = TempDir::new().unwrap();

        let (id_a, dir_a) = allocate_workdir(root.path()).await.unwrap();
        let (id_b, dir_b) = allocate_workdir(root.path()).await.unwrap();

        assert_ne!(id_a, id_b);
        assert_ne!(dir_a, dir_b);
        assert!(dir_a.is_dir());
        assert!(dir_b.is_dir());
    }
}
