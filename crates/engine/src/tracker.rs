// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger of phase outcomes and errors for the current activation period.

use ns_core::{Phase, PhaseOutcome, PhaseRecord, QueuedProject, RunError};

#[derive(Debug, Default, Clone)]
pub struct RunTracker {
    records: Vec<PhaseRecord>,
    errors: Vec<RunError>,
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(
        &mut self,
        project: &QueuedProject,
        phase: Phase,
        feature: Option<&str>,
        at_ms: u64,
    ) {
        self.records.push(PhaseRecord {
            project: project.id.clone(),
            project_name: project.name.clone(),
            phase,
            feature: feature.map(str::to_string),
            outcome: PhaseOutcome::Completed,
            at_ms,
        });
    }

    /// Append a failed attempt; it also lands on the error list.
    pub fn record_failure(
        &mut self,
        project: &QueuedProject,
        phase: Phase,
        error: impl Into<String>,
        at_ms: u64,
    ) {
        let error = error.into();
        self.records.push(PhaseRecord {
            project: project.id.clone(),
            project_name: project.name.clone(),
            phase,
            feature: None,
            outcome: PhaseOutcome::Failed { error: error.clone() },
            at_ms,
        });
        self.errors.push(RunError { project: Some(project.id.clone()), phase: Some(phase), error, at_ms });
    }

    pub fn record_error(&mut self, error: RunError) {
        self.errors.push(error);
    }

    /// Every record in the order work finished.
    pub fn records(&self) -> &[PhaseRecord] {
        &self.records
    }

    pub fn completed(&self) -> impl Iterator<Item = &PhaseRecord> {
        self.records.iter().filter(|r| r.is_success())
    }

    pub fn tasks_completed(&self) -> usize {
        self.completed().count()
    }

    pub fn errors(&self) -> &[RunError] {
        &self.errors
    }

    pub fn reset(&mut self) {
        self.records.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
