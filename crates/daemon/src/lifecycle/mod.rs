// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup and shutdown.

mod startup;
pub use startup::startup;

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use ns_adapters::CommandCollaborator;
use ns_core::{Event, SystemClock};
use ns_engine::{Engine, EngineError};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Engine with the concrete adapters the daemon runs
pub type DaemonEngine = Engine<CommandCollaborator, SystemClock>;

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root state directory (e.g. ~/.local/state/nightshift)
    pub state_dir: PathBuf,
    /// Path to lock/PID file
    pub lock_path: PathBuf,
    /// Path to daemon log file
    pub log_path: PathBuf,
    /// Persisted engine configuration
    pub config_path: PathBuf,
    /// Dated run summaries
    pub summaries_path: PathBuf,
    /// Descriptors imported at startup
    pub inbox_path: PathBuf,
    /// Collaborator program and arguments
    pub collaborator_cmd: Option<String>,
    /// Scheduler poll interval override
    pub tick_override: Option<Duration>,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self, LifecycleError> {
        let mut config = Self::for_state_dir(crate::env::state_dir()?);
        config.collaborator_cmd = crate::env::collaborator_command();
        config.tick_override = crate::env::tick_interval();
        Ok(config)
    }

    /// Fixed layout under `state_dir`.
    pub fn for_state_dir(state_dir: PathBuf) -> Self {
        Self {
            lock_path: state_dir.join("daemon.pid"),
            log_path: state_dir.join("daemon.log"),
            config_path: state_dir.join("config.toml"),
            summaries_path: state_dir.join("summaries"),
            inbox_path: state_dir.join("inbox"),
            collaborator_cmd: None,
            tick_override: None,
            state_dir,
        }
    }
}

/// Daemon state during operation.
pub struct DaemonState {
    pub config: Config,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    lock_file: File,
    pub engine: DaemonEngine,
}

/// Result of daemon startup: the running state plus the event receiver for
/// the dispatcher task.
pub struct StartupResult {
    pub daemon: DaemonState,
    pub events: mpsc::Receiver<Event>,
}

impl DaemonState {
    /// Close out any active run and release on-disk markers.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("shutting down daemon");
        if let Some(summary) = self.engine.shutdown().await {
            info!(
                date = %summary.date,
                tasks_completed = summary.tasks_completed,
                "closed out active run"
            );
        }

        if self.config.lock_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.config.lock_path) {
                warn!(error = %e, "failed to remove PID file");
            }
        }
        // Lock is released when lock_file drops
        info!("daemon shutdown complete");
        Ok(())
    }
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("could not determine state directory")]
    NoStateDir,

    #[error("failed to acquire lock: daemon already running?")]
    LockFailed(#[source] std::io::Error),

    #[error("NS_COLLABORATOR_CMD is not set")]
    NoCollaborator,

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
