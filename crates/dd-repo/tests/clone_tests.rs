use std::fs;
use std::process::Stdio;
use tempfile::TempDir;

use dd_repo::{FetchError, clone_repo};

fn check_git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn setup_source_repo() -> Result<(TempDir, TempDir), Box<dyn std::error::Error>> {
    // Set environment variables globally for this test
    std::env::set_var("GIT_CONFIG_NOSYSTEM", "1");
    std::env::set_var("GIT_TERMINAL_PROMPT", "0");
    std::env::set_var("GIT_ASKPASS", "echo");

    // Set HOME to a temporary directory to avoid accessing user git config
    let temp_home = TempDir::new()?;
    std::env::set_var("HOME", temp_home.path());

    let source_dir = TempDir::new()?;

    std::process::Command::new("git")
        .args(&["init", "-b", "main"])
        .current_dir(&source_dir)
        .output()?;

    std::process::Command::new("git")
        .args(&["config", "user.email", "test@example.com"])
        .current_dir(&source_dir)
        .output()?;

    std::process::Command::new("git")
        .args(&["config", "user.name", "Test User"])
        .current_dir(&source_dir)
        .output()?;

    fs::write(source_dir.path().join("README.md"), "Initial content")?;
    std::process::Command::new("git")
        .args(&["add", "README.md"])
        .current_dir(&source_dir)
        .output()?;

    std::process::Command::new("git")
        .args(&["commit", "-m", "Initial commit"])
        .current_dir(&source_dir)
        .output()?;

    Ok((temp_home, source_dir))
}

#[tokio::test]
async fn test_clone_produces_full_working_copy() {
    if !check_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let (_temp_home, source) = setup_source_repo().unwrap();
    let dest_parent = TempDir::new().unwrap();
    let dest = dest_parent.path().join("clone");

    let cloned = clone_repo(source.path().to_str().unwrap(), &dest).await.unwrap();

    assert_eq!(cloned.root(), dest.as_path());
    assert_eq!(
        fs::read_to_string(dest.join("README.md")).unwrap(),
        "Initial content"
    );
    // A full clone carries the version-control metadata too
    assert!(dest.join(".git").is_dir());
}

#[tokio::test]
async fn test_clone_creates_parent_directories() {
    if !check_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let (_temp_home, source) = setup_source_repo().unwrap();
    let dest_parent = TempDir::new().unwrap();
    let dest = dest_parent.path().join("nested").join("output").join("clone");

    clone_repo(source.path().to_str().unwrap(), &dest).await.unwrap();

    assert!(dest.join("README.md").is_file());
}

#[tokio::test]
async fn test_clone_into_existing_empty_directory() {
    if !check_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let (_temp_home, source) = setup_source_repo().unwrap();
    let dest_parent = TempDir::new().unwrap();
    let dest = dest_parent.path().join("clone");
    fs::create_dir(&dest).unwrap();

    clone_repo(source.path().to_str().unwrap(), &dest).await.unwrap();

    assert!(dest.join("README.md").is_file());
}

#[tokio::test]
async fn test_clone_unreachable_source_fails() {
    if !check_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let dest_parent = TempDir::new().unwrap();
    let dest = dest_parent.path().join("clone");

    let result = clone_repo("/nonexistent/nowhere.git", &dest).await;

    match result {
        Err(FetchError::CloneFailed { message }) => {
            assert!(!message.is_empty(), "git should explain the failure");
        }
        other => panic!("expected CloneFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_clone_into_non_empty_directory_fails() {
    if !check_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let (_temp_home, source) = setup_source_repo().unwrap();
    let dest_parent = TempDir::new().unwrap();
    let dest = dest_parent.path().join("clone");
    fs::create_dir(&dest).unwrap();
    fs::write(dest.join("existing.txt"), "already here").unwrap();

    let result = clone_repo(source.path().to_str().unwrap(), &dest).await;

    assert!(matches!(result, Err(FetchError::CloneFailed { .. })));
}
