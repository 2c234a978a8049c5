// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Clone operations against remote git repositories

use crate::error::{FetchError, FetchResult};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

// Lines of stderr kept for the error message when a clone fails.
const STDERR_TAIL_LINES: usize = 8;

/// Handle to a completed clone on local disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedRepo {
    root: PathBuf,
}

impl ClonedRepo {
    /// Root directory of the working copy
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Clone the default branch of `url` into `dest`, creating parent
/// directories as needed.
///
/// The clone tolerates an existing *empty* destination directory; a
/// non-empty one fails the same way an unreachable remote does. Progress
/// output from git is forwarded to the diagnostic log at debug level and is
/// never part of the result.
pub async fn clone_repo(url: &str, dest: &Path) -> FetchResult<ClonedRepo> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut child = Command::new("git")
        .arg("clone")
        .arg("--progress")
        .arg(url)
        .arg(dest)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(FetchError::Spawn)?;

    // git writes clone progress to stderr; keep the tail for error reporting.
    let mut tail: Vec<String> = Vec::new();
    if let Some(stderr) = child.stderr.take() {
        let mut lines = BufReader::new(stderr).lines();
        while let Some(line) = lines.next_line().await? {
            debug!(target: "git", "{}", line);
            if tail.len() == STDERR_TAIL_LINES {
                tail.remove(0);
            }
            tail.push(line);
        }
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(FetchError::CloneFailed {
            message: tail.join("\n"),
        });
    }

    Ok(ClonedRepo {
        root: dest.to_path_buf(),
    })
}
