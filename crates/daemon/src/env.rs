// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon.

use std::path::PathBuf;
use std::time::Duration;

use crate::lifecycle::LifecycleError;

/// Resolve state directory: NS_STATE_DIR > XDG_STATE_HOME/nightshift > ~/.local/state/nightshift
pub fn state_dir() -> Result<PathBuf, LifecycleError> {
    if let Some(dir) = non_empty("NS_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("nightshift"));
    }
    let home = dirs::home_dir().ok_or(LifecycleError::NoStateDir)?;
    Ok(home.join(".local/state/nightshift"))
}

/// Collaborator program and arguments, whitespace separated.
///
/// Quoting is not interpreted: `agent --name "night shift"` passes `"night`
/// and `shift"` as two arguments. Point at a wrapper script when an argument
/// needs spaces.
pub fn collaborator_command() -> Option<String> {
    non_empty("NS_COLLABORATOR_CMD")
}

/// Scheduler poll interval override
pub fn tick_interval() -> Option<Duration> {
    std::env::var("NS_TICK_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// Desktop notifications unless `NS_NOTIFY` is `0` or `off`.
pub fn notifications_enabled() -> bool {
    !matches!(std::env::var("NS_NOTIFY").as_deref(), Ok("0") | Ok("off"))
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
