// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup import of project descriptors dropped into `<state_dir>/inbox/`.
//!
//! Each `*.json` file holds one descriptor. Imported files move to
//! `inbox/accepted/`, unreadable or invalid ones to `inbox/rejected/`.

use std::path::{Path, PathBuf};

use ns_adapters::Collaborator;
use ns_core::{Clock, ProjectDescriptor, ProjectId};
use ns_engine::Engine;
use tracing::{info, warn};

use crate::lifecycle::LifecycleError;

#[derive(Debug, Default)]
pub struct ImportReport {
    pub accepted: Vec<ProjectId>,
    pub rejected: Vec<PathBuf>,
}

pub fn import_inbox<A: Collaborator, C: Clock>(
    inbox: &Path,
    engine: &Engine<A, C>,
) -> Result<ImportReport, LifecycleError> {
    let accepted_dir = inbox.join("accepted");
    let rejected_dir = inbox.join("rejected");
    std::fs::create_dir_all(&accepted_dir)?;
    std::fs::create_dir_all(&rejected_dir)?;

    let mut files: Vec<PathBuf> = std::fs::read_dir(inbox)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut report = ImportReport::default();
    for path in files {
        let Some(name) = path.file_name().map(|n| n.to_owned()) else {
            continue;
        };
        match enqueue_file(&path, engine) {
            Ok(id) => {
                info!(project = %id, file = %path.display(), "imported project from inbox");
                std::fs::rename(&path, accepted_dir.join(&name))?;
                report.accepted.push(id);
            }
            Err(reason) => {
                warn!(file = %path.display(), error = %reason, "rejected inbox file");
                let target = rejected_dir.join(&name);
                std::fs::rename(&path, &target)?;
                report.rejected.push(target);
            }
        }
    }
    Ok(report)
}

fn enqueue_file<A: Collaborator, C: Clock>(
    path: &Path,
    engine: &Engine<A, C>,
) -> Result<ProjectId, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    let descriptor: ProjectDescriptor =
        serde_json::from_slice(&bytes).map_err(|e| format!("invalid JSON: {e}"))?;
    let queued = engine.enqueue_project(descriptor).map_err(|e| e.to_string())?;
    Ok(queued.id)
}

#[cfg(test)]
#[path = "inbox_tests.rs"]
mod tests;
