// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine facade: owns configuration, queue, and tracker, and is the only
//! way callers reach them.

use crate::dispatcher::EventEmitter;
use crate::error::EngineError;
use crate::queue::ProjectQueue;
use crate::tracker::RunTracker;
use chrono::NaiveDate;
use ns_adapters::Collaborator;
use ns_core::{
    Clock, ConfigPatch, Event, NightConfig, Phase, PhaseRecord, ProjectDescriptor, ProjectId,
    ProjectStatus, QueuedProject, RunError, RunSummary,
};
use ns_storage::{ConfigStore, StorageError, SummaryStore};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// External collaborators and stores the engine is built from.
pub struct EngineDeps<A> {
    pub collaborator: A,
    pub config_store: ConfigStore,
    pub summary_store: SummaryStore,
}

/// Activation state guarded by a single lock.
#[derive(Default)]
pub(crate) struct RunState {
    pub(crate) active: bool,
    pub(crate) started_at_ms: u64,
    /// Cancelled on deactivation
    pub(crate) token: Option<CancellationToken>,
    pub(crate) task: Option<JoinHandle<()>>,
    /// Flips to `true` once the run task returns or unwinds
    pub(crate) finished: Option<watch::Receiver<bool>>,
}

impl RunState {
    pub(crate) fn task_running(&self) -> bool {
        self.finished.as_ref().is_some_and(|rx| !*rx.borrow())
    }

    /// Hand over the run task's handle only once it has stopped.
    pub(crate) fn take_finished(&mut self) -> Option<JoinHandle<()>> {
        if self.task_running() {
            return None;
        }
        self.finished = None;
        self.task.take()
    }
}

pub(crate) struct Inner<A, C> {
    pub(crate) collaborator: A,
    pub(crate) clock: C,
    pub(crate) config_store: ConfigStore,
    pub(crate) summary_store: SummaryStore,
    pub(crate) config: Mutex<NightConfig>,
    pub(crate) queue: Mutex<ProjectQueue>,
    pub(crate) tracker: Mutex<RunTracker>,
    pub(crate) run: Mutex<RunState>,
    /// Project the pipeline is working on, mirrored for status reads
    pub(crate) current: Mutex<Option<QueuedProject>>,
    pub(crate) events: EventEmitter,
    /// Cancelled once on engine shutdown; aborts in-flight collaborator calls
    pub(crate) shutdown: CancellationToken,
}

/// The night-mode orchestration engine.
///
/// Cheap to clone; clones share the same state.
pub struct Engine<A, C> {
    pub(crate) inner: Arc<Inner<A, C>>,
}

impl<A, C> Clone for Engine<A, C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

/// The project currently in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentProject {
    pub id: ProjectId,
    pub name: String,
    pub phase: Option<Phase>,
    pub retries: u32,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub tasks_completed: usize,
    pub errors: usize,
}

/// Read model returned by [`Engine::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub is_active: bool,
    pub current_project: Option<CurrentProject>,
    pub queue_length: usize,
    pub progress: Progress,
    pub config: NightConfig,
}

impl<A: Collaborator, C: Clock> Engine<A, C> {
    /// Build an engine, loading configuration from the store (defaults when absent).
    pub fn new(
        deps: EngineDeps<A>,
        clock: C,
        event_tx: mpsc::Sender<Event>,
    ) -> Result<Self, EngineError> {
        let config = deps.config_store.load()?;
        config.validate()?;
        tracing::info!(
            start_hour = config.start_hour,
            end_hour = config.end_hour,
            max_retries = config.max_retries,
            "engine configured"
        );
        Ok(Self {
            inner: Arc::new(Inner {
                collaborator: deps.collaborator,
                clock,
                config_store: deps.config_store,
                summary_store: deps.summary_store,
                config: Mutex::new(config),
                queue: Mutex::new(ProjectQueue::new()),
                tracker: Mutex::new(RunTracker::new()),
                run: Mutex::new(RunState::default()),
                current: Mutex::new(None),
                events: EventEmitter::new(event_tx),
                shutdown: CancellationToken::new(),
            }),
        })
    }

    /// Validate a descriptor and add it to the queue.
    pub fn enqueue_project(
        &self,
        descriptor: ProjectDescriptor,
    ) -> Result<QueuedProject, EngineError> {
        descriptor.validate()?;
        let project = QueuedProject::from_descriptor(descriptor, self.inner.clock.epoch_ms());
        let queued = self.inner.queue.lock().enqueue(project)?.clone();
        tracing::info!(
            project = %queued.id,
            name = %queued.name,
            priority = queued.priority,
            features = queued.features.len(),
            "project queued"
        );
        Ok(queued)
    }

    pub fn remove_from_queue(&self, id: &str) -> Result<QueuedProject, EngineError> {
        let removed = self.inner.queue.lock().remove_by_id(id)?;
        tracing::info!(project = %removed.id, "project removed from queue");
        Ok(removed)
    }

    /// Merge `patch` into the configuration and persist it.
    ///
    /// Nothing changes when validation or persistence fails.
    pub fn update_configuration(&self, patch: &ConfigPatch) -> Result<NightConfig, EngineError> {
        let mut config = self.inner.config.lock();
        let merged = config.merged(patch)?;
        self.inner.config_store.save(&merged)?;
        *config = merged.clone();
        tracing::info!(
            start_hour = merged.start_hour,
            end_hour = merged.end_hour,
            max_retries = merged.max_retries,
            check_interval_ms = merged.check_interval_ms,
            "configuration updated"
        );
        Ok(merged)
    }

    pub fn config(&self) -> NightConfig {
        self.inner.config.lock().clone()
    }

    pub fn status(&self) -> StatusSnapshot {
        let current_project = self.inner.current.lock().as_ref().map(|p| CurrentProject {
            id: p.id.clone(),
            name: p.name.clone(),
            phase: p.phase,
            retries: p.retries,
            status: p.status,
        });
        let progress = {
            let tracker = self.inner.tracker.lock();
            Progress { tasks_completed: tracker.tasks_completed(), errors: tracker.errors().len() }
        };
        StatusSnapshot {
            is_active: self.is_active(),
            current_project,
            queue_length: self.inner.queue.lock().len(),
            progress,
            config: self.config(),
        }
    }

    /// Stored summary for `date`.
    pub fn summary(&self, date: NaiveDate) -> Result<RunSummary, EngineError> {
        self.inner.summary_store.load(date).map_err(|e| match e {
            StorageError::SummaryNotFound(date) => EngineError::SummaryNotFound(date),
            other => EngineError::Storage(other),
        })
    }

    /// Queued projects in run order.
    pub fn queued(&self) -> Vec<QueuedProject> {
        self.inner.queue.lock().iter().cloned().collect()
    }

    pub fn is_active(&self) -> bool {
        self.inner.run.lock().active
    }

    /// Phase records of the current activation period.
    pub fn records(&self) -> Vec<PhaseRecord> {
        self.inner.tracker.lock().records().to_vec()
    }

    /// Errors of the current activation period.
    pub fn errors(&self) -> Vec<RunError> {
        self.inner.tracker.lock().errors().to_vec()
    }

    /// Wait for the current run task, if any, to finish on its own.
    ///
    /// The run stays registered while waiting, so a concurrent tick cannot
    /// start a second one.
    pub async fn wait_for_run(&self) {
        let finished = self.inner.run.lock().finished.clone();
        if let Some(mut finished) = finished {
            // A dropped sender also means the task is gone
            let _ = finished.wait_for(|done| *done).await;
        }
        let task = self.inner.run.lock().take_finished();
        if let Some(task) = task {
            self.reap(task).await;
        }
    }

    /// Stop the scheduler loop and any in-flight collaborator call, closing
    /// out the activation period if one is open.
    pub async fn shutdown(&self) -> Option<RunSummary> {
        tracing::info!("engine shutting down");
        self.inner.shutdown.cancel();
        if self.is_active() {
            Some(self.deactivate().await)
        } else {
            self.wait_for_run().await;
            None
        }
    }

    pub(crate) fn emit(&self, event: Event) {
        self.inner.events.emit(event);
    }

    pub(crate) fn record_error(&self, error: RunError) {
        self.inner.tracker.lock().record_error(error);
    }

    /// Await a stopped run task and record it if it panicked.
    pub(crate) async fn reap(&self, task: JoinHandle<()>) {
        if let Err(e) = task.await {
            self.record_task_failure(e);
        }
    }

    fn record_task_failure(&self, e: tokio::task::JoinError) {
        tracing::error!(error = %e, "run task ended abnormally");
        self.record_error(RunError::scheduler(
            format!("run task ended abnormally: {e}"),
            self.inner.clock.epoch_ms(),
        ));
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
