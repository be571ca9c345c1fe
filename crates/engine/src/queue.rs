// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Priority queue of projects waiting for the night.

use ns_core::{ProjectId, QueuedProject};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Benign: nothing to do
    #[error("queue is empty")]
    Empty,
    #[error("project {0} is not queued")]
    NotFound(ProjectId),
    #[error("project {0} is already queued")]
    Duplicate(ProjectId),
}

/// Projects ordered by priority, highest first; equal priorities keep
/// insertion order.
#[derive(Debug, Default, Clone)]
pub struct ProjectQueue {
    items: Vec<QueuedProject>,
}

impl ProjectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a project and restore priority order. Returns the stored record.
    pub fn enqueue(&mut self, project: QueuedProject) -> Result<&QueuedProject, QueueError> {
        if self.contains(project.id.as_str()) {
            return Err(QueueError::Duplicate(project.id));
        }
        let id = project.id.clone();
        self.items.push(project);
        // sort_by is stable, so ties stay FIFO
        self.items.sort_by(|a, b| b.priority.cmp(&a.priority));
        self.items.iter().find(|p| p.id == id).ok_or(QueueError::NotFound(id))
    }

    pub fn dequeue_highest(&mut self) -> Result<QueuedProject, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.items.remove(0))
    }

    pub fn remove_by_id(&mut self, id: &str) -> Result<QueuedProject, QueueError> {
        let idx = self
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| QueueError::NotFound(ProjectId::new(id)))?;
        Ok(self.items.remove(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedProject> {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
