// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator adapter: the code-generation backend each phase delegates to.

mod command;
#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use command::CommandCollaborator;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeCollaborator;

use async_trait::async_trait;
use ns_core::{Brief, Feature, ProjectId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from talking to the collaborator
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("failed to spawn collaborator: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("collaborator I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("collaborator exited with code {code}: {stderr}")]
    Exited { code: i32, stderr: String },
    #[error("malformed collaborator response: {0}")]
    Protocol(String),
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

/// The work a single request asks for, tagged by `action` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Task {
    Setup { task: String },
    Scaffold { layout: Vec<String> },
    ImplementFeature { feature: Feature, brief: Brief },
    Commit { message: String },
    RunTests { types: Vec<String> },
    FixTests { failures: u64 },
    Optimize { passes: Vec<String> },
    Document { docs: Vec<String> },
    Deploy,
}

impl Task {
    pub fn action(&self) -> &'static str {
        match self {
            Task::Setup { .. } => "setup",
            Task::Scaffold { .. } => "scaffold",
            Task::ImplementFeature { .. } => "implement_feature",
            Task::Commit { .. } => "commit",
            Task::RunTests { .. } => "run_tests",
            Task::FixTests { .. } => "fix_tests",
            Task::Optimize { .. } => "optimize",
            Task::Document { .. } => "document",
            Task::Deploy => "deploy",
        }
    }
}

/// A request payload: the project it concerns plus the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub project_id: ProjectId,
    pub project: String,
    #[serde(flatten)]
    pub task: Task,
}

impl Instruction {
    pub fn new(project_id: ProjectId, project: impl Into<String>, task: Task) -> Self {
        Self { project_id, project: project.into(), task }
    }

    pub fn action(&self) -> &'static str {
        self.task.action()
    }
}

/// Structured reply from the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorResponse {
    pub success: bool,
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default)]
    pub details: serde_json::Value,
}

impl CollaboratorResponse {
    pub fn ok() -> Self {
        Self { success: true, result: serde_json::Value::Null, details: serde_json::Value::Null }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: serde_json::Value::Null,
            details: serde_json::json!({ "error": message.into() }),
        }
    }

    /// Failing test count reported by a `run_tests` reply (`details.failures`
    /// or `result.failures`), zero when absent.
    pub fn test_failures(&self) -> u64 {
        [&self.details, &self.result]
            .iter()
            .find_map(|v| v.get("failures").and_then(serde_json::Value::as_u64))
            .unwrap_or(0)
    }

    /// Best-effort error text for an unsuccessful reply.
    pub fn error_message(&self) -> String {
        [&self.details, &self.result]
            .iter()
            .find_map(|v| v.get("error").and_then(serde_json::Value::as_str))
            .map(str::to_string)
            .or_else(|| self.result.as_str().map(str::to_string))
            .unwrap_or_else(|| "collaborator reported failure".to_string())
    }
}

/// Adapter for the external code-generation agent.
///
/// One request is in flight per active project; callers treat
/// `success == false` and `Err` alike as a retryable failure.
#[async_trait]
pub trait Collaborator: Clone + Send + Sync + 'static {
    async fn request(
        &self,
        instruction: &Instruction,
    ) -> Result<CollaboratorResponse, CollaboratorError>;
}

#[cfg(test)]
#[path = "../collaborator_tests.rs"]
mod tests;
