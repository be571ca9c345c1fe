// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound events emitted by the engine

mod methods;

use crate::phase::Phase;
use crate::project::ProjectId;
use crate::summary::RunSummary;
use serde::{Deserialize, Serialize};

/// Events published to the notification sink.
///
/// Serializes with `{"type": "event:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "activated")]
    Activated { at_ms: u64 },

    #[serde(rename = "deactivated")]
    Deactivated { at_ms: u64, summary: Box<RunSummary> },

    #[serde(rename = "phase:completed")]
    PhaseCompleted { project: ProjectId, name: String, phase: Phase },

    #[serde(rename = "project:completed")]
    ProjectCompleted { project: ProjectId, name: String },

    #[serde(rename = "project:failed")]
    ProjectFailed { project: ProjectId, name: String, phase: Phase, error: String },
}

#[cfg(test)]
#[path = "../event_tests.rs"]
mod tests;
