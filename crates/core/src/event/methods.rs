// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::Event;

impl Event {
    /// Wire name of the event (matches the serde tag).
    pub fn name(&self) -> &'static str {
        match self {
            Event::Activated { .. } => "activated",
            Event::Deactivated { .. } => "deactivated",
            Event::PhaseCompleted { .. } => "phase:completed",
            Event::ProjectCompleted { .. } => "project:completed",
            Event::ProjectFailed { .. } => "project:failed",
        }
    }

    /// One-line description for log output.
    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::Activated { at_ms } => format!("{t} at_ms={at_ms}"),
            Event::Deactivated { summary, .. } => format!(
                "{t} projects_completed={} tasks_completed={} errors={}",
                summary.projects_completed, summary.tasks_completed, summary.errors
            ),
            Event::PhaseCompleted { project, phase, .. } => {
                format!("{t} project={project} phase={phase}")
            }
            Event::ProjectCompleted { project, .. } => format!("{t} project={project}"),
            Event::ProjectFailed { project, phase, error, .. } => {
                format!("{t} project={project} phase={phase} error={error}")
            }
        }
    }

    /// Title and body for a desktop notification, if this event warrants one.
    pub fn notification(&self) -> Option<(String, String)> {
        match self {
            Event::Deactivated { summary, .. } => Some((
                "Night run finished".to_string(),
                format!(
                    "{} projects completed, {} tasks, {} errors in {}",
                    summary.projects_completed,
                    summary.tasks_completed,
                    summary.errors,
                    summary.duration
                ),
            )),
            Event::ProjectCompleted { name, .. } => {
                Some(("Project completed".to_string(), format!("{name} finished all phases")))
            }
            Event::ProjectFailed { name, phase, error, .. } => Some((
                "Project failed".to_string(),
                format!("{name} gave up during {phase}: {error}"),
            )),
            Event::Activated { .. } | Event::PhaseCompleted { .. } => None,
        }
    }
}
