// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger entries produced while a run is active.

use crate::phase::Phase;
use crate::project::ProjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhaseOutcome {
    Completed,
    Failed { error: String },
}

/// Outcome of one phase attempt (or one feature, for Implement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub project: ProjectId,
    pub project_name: String,
    pub phase: Phase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    pub outcome: PhaseOutcome,
    pub at_ms: u64,
}

impl PhaseRecord {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, PhaseOutcome::Completed)
    }
}

/// An error observed during a run: a failed phase attempt or a scheduler fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    pub error: String,
    pub at_ms: u64,
}

impl RunError {
    /// Error raised outside any project (activation or deactivation).
    pub fn scheduler(error: impl Into<String>, at_ms: u64) -> Self {
        Self { project: None, phase: None, error: error.into(), at_ms }
    }
}
