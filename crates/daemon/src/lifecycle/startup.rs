// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon startup and initialization logic.

use std::io::Write;

use fs2::FileExt;
use ns_adapters::CommandCollaborator;
use ns_core::SystemClock;
use ns_engine::{Engine, EngineDeps};
use ns_storage::{ConfigStore, SummaryStore};
use tokio::sync::mpsc;
use tracing::info;

use super::{Config, DaemonState, LifecycleError, StartupResult};
use crate::inbox::import_inbox;

/// Capacity of the engine's outbound event channel
const EVENT_BUFFER: usize = 256;

/// Start the daemon
pub fn startup(config: &Config) -> Result<StartupResult, LifecycleError> {
    // 1. Create state directory
    std::fs::create_dir_all(&config.state_dir)?;

    // 2. Acquire lock file FIRST - prevents two daemons sharing a queue
    // Open without truncating so a running daemon's PID survives a failed attempt.
    let lock_file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&config.lock_path)?;
    lock_file.try_lock_exclusive().map_err(LifecycleError::LockFailed)?;

    let mut lock_file = lock_file;
    lock_file.set_len(0)?;
    writeln!(lock_file, "{}", std::process::id())?;
    let lock_file = lock_file;

    // 3. Directories
    std::fs::create_dir_all(&config.summaries_path)?;
    std::fs::create_dir_all(&config.inbox_path)?;

    // 4. Engine
    let command = config.collaborator_cmd.as_deref().ok_or(LifecycleError::NoCollaborator)?;
    let collaborator = CommandCollaborator::from_command_line(command)
        .ok_or(LifecycleError::NoCollaborator)?
        .cwd(&config.state_dir);
    let (event_tx, events) = mpsc::channel(EVENT_BUFFER);
    let engine = Engine::new(
        EngineDeps {
            collaborator,
            config_store: ConfigStore::new(&config.config_path),
            summary_store: SummaryStore::new(&config.summaries_path),
        },
        SystemClock,
        event_tx,
    )?;

    // 5. Inbox
    let report = import_inbox(&config.inbox_path, &engine)?;
    info!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        queue_length = engine.status().queue_length,
        "inbox imported"
    );

    Ok(StartupResult {
        daemon: DaemonState { config: config.clone(), lock_file, engine },
        events,
    })
}
