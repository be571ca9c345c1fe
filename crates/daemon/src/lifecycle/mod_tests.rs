// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn test_config(dir: &std::path::Path) -> Config {
    let mut config = Config::for_state_dir(dir.join("state"));
    config.collaborator_cmd = Some("true".to_string());
    config
}

#[test]
fn layout_lives_under_state_dir() {
    let config = Config::for_state_dir(PathBuf::from("/var/ns"));
    assert_eq!(config.lock_path, PathBuf::from("/var/ns/daemon.pid"));
    assert_eq!(config.log_path, PathBuf::from("/var/ns/daemon.log"));
    assert_eq!(config.config_path, PathBuf::from("/var/ns/config.toml"));
    assert_eq!(config.summaries_path, PathBuf::from("/var/ns/summaries"));
    assert_eq!(config.inbox_path, PathBuf::from("/var/ns/inbox"));
}

#[tokio::test]
async fn startup_writes_pid_and_imports_inbox() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.inbox_path).unwrap();
    std::fs::write(
        config.inbox_path.join("blog.json"),
        r#"{"id":"blog","name":"Blog","brief":{"overview":"Personal blog"}}"#,
    )
    .unwrap();

    let StartupResult { daemon, .. } = startup(&config).unwrap();
    let pid = std::fs::read_to_string(&config.lock_path).unwrap();
    assert_eq!(pid.trim(), std::process::id().to_string());
    assert_eq!(daemon.engine.queued()[0].id, "blog");

    daemon.shutdown().await.unwrap();
    assert!(!config.lock_path.exists());
}

#[tokio::test]
async fn second_daemon_fails_to_lock() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let first = startup(&config).unwrap();

    let second = startup(&config);
    assert!(matches!(second, Err(LifecycleError::LockFailed(_))));
    // The running daemon's PID is untouched
    let pid = std::fs::read_to_string(&config.lock_path).unwrap();
    assert_eq!(pid.trim(), std::process::id().to_string());

    first.daemon.shutdown().await.unwrap();
}

#[test]
fn missing_collaborator_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::for_state_dir(dir.path().to_path_buf());
    assert!(matches!(startup(&config), Err(LifecycleError::NoCollaborator)));
}
