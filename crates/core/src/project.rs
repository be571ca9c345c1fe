// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project descriptors and their queued form.

use crate::phase::Phase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

crate::define_id! {
    /// Unique identifier of a queued project, caller-supplied or generated.
    pub struct ProjectId("prj-");
}

/// Structured description of what the project should become.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brief {
    pub overview: String,
    pub objectives: Vec<String>,
    pub scope: String,
}

impl Brief {
    pub fn new(overview: impl Into<String>) -> Self {
        Self { overview: overview.into(), ..Self::default() }
    }

    pub fn is_blank(&self) -> bool {
        self.overview.trim().is_empty()
            && self.scope.trim().is_empty()
            && self.objectives.iter().all(|o| o.trim().is_empty())
    }
}

/// One feature to implement, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(default = "default_level")]
    pub priority: String,
    #[serde(default = "default_level")]
    pub complexity: String,
}

fn default_level() -> String {
    "medium".to_string()
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), priority: default_level(), complexity: default_level() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
}

crate::simple_display! {
    ProjectStatus {
        Queued => "queued",
        InProgress => "in-progress",
        Completed => "completed",
        Failed => "failed",
    }
}

/// Errors from validating an incoming descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("project name is required")]
    MissingName,
    #[error("project brief is required")]
    MissingBrief,
}

/// What a caller submits to the queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDescriptor {
    pub id: Option<ProjectId>,
    pub name: String,
    pub brief: Option<Brief>,
    pub features: Vec<Feature>,
    pub tech_stack: BTreeMap<String, String>,
    pub workflow: Option<String>,
    pub priority: i64,
}

impl ProjectDescriptor {
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::MissingName);
        }
        match &self.brief {
            Some(brief) if !brief.is_blank() => Ok(()),
            _ => Err(DescriptorError::MissingBrief),
        }
    }
}

crate::builder! {
    pub struct DescriptorBuilder => ProjectDescriptor {
        into {
            name: String = "demo-app",
        }
        set {
            id: Option<ProjectId> = None,
            brief: Option<Brief> = Some(Brief::new("A small demo application")),
            features: Vec<Feature> = vec![Feature::new("login"), Feature::new("dashboard")],
            tech_stack: BTreeMap<String, String> = BTreeMap::new(),
            workflow: Option<String> = None,
            priority: i64 = 0,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl DescriptorBuilder {
    pub fn with_id(self, id: &str) -> Self {
        self.id(Some(ProjectId::new(id)))
    }

    pub fn feature_names(self, names: &[&str]) -> Self {
        self.features(names.iter().map(|n| Feature::new(*n)).collect())
    }

    pub fn stack(mut self, key: &str, value: &str) -> Self {
        self.tech_stack.insert(key.to_string(), value.to_string());
        self
    }
}

/// A descriptor accepted into the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedProject {
    pub id: ProjectId,
    pub name: String,
    pub brief: Brief,
    pub features: Vec<Feature>,
    pub tech_stack: BTreeMap<String, String>,
    pub workflow: String,
    pub priority: i64,
    pub status: ProjectStatus,
    pub retries: u32,
    pub queued_at_ms: u64,
    /// Phase the project last entered during the current run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
}

impl QueuedProject {
    /// Build the queued record from an already validated descriptor.
    pub fn from_descriptor(descriptor: ProjectDescriptor, queued_at_ms: u64) -> Self {
        Self {
            id: descriptor.id.filter(|id| !id.is_empty()).unwrap_or_else(ProjectId::generate),
            name: descriptor.name,
            brief: descriptor.brief.unwrap_or_default(),
            features: descriptor.features,
            tech_stack: descriptor.tech_stack,
            workflow: descriptor.workflow.unwrap_or_else(|| "default".to_string()),
            priority: descriptor.priority,
            status: ProjectStatus::Queued,
            retries: 0,
            queued_at_ms,
            phase: None,
        }
    }

    /// Reset per-run state when the pipeline picks the project up.
    pub fn begin(&mut self) {
        self.status = ProjectStatus::InProgress;
        self.retries = 0;
        self.phase = None;
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
