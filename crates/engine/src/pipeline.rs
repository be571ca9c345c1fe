// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase pipeline: drives queued projects through Setup → Document.

use crate::engine::Engine;
use crate::layout::scaffold_layout;
use ns_adapters::{Collaborator, CollaboratorError, CollaboratorResponse, Instruction, Task};
use ns_core::{Clock, Event, NightConfig, Phase, ProjectStatus, QueuedProject};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

const SETUP_TASKS: [&str; 4] = [
    "Create development environment",
    "Initialize git repository",
    "Install dependencies",
    "Create project structure",
];
const TEST_TYPES: [&str; 3] = ["unit", "integration", "e2e"];
const OPTIMIZE_PASSES: [&str; 3] = ["performance", "bundle-size", "code-quality"];
const DOCS: [&str; 3] = ["README", "API", "USER_GUIDE"];

/// Why a phase attempt failed. All but `Shutdown` are retryable.
#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("{action} failed: {message}")]
    Rejected { action: &'static str, message: String },
    #[error("{action} request failed: {source}")]
    Collaborator {
        action: &'static str,
        #[source]
        source: CollaboratorError,
    },
    #[error("{action} timed out after {}ms", after.as_millis())]
    TimedOut { action: &'static str, after: Duration },
    #[error("engine shutting down")]
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseRun {
    Completed,
    /// The run was cancelled before the phase could finish
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    Completed,
    /// Retries exhausted; the project is marked failed
    Abandoned,
    Interrupted,
}

/// One run task: pulls projects off the queue until it is empty or the run
/// is cancelled.
pub(crate) struct RunContext<A, C> {
    engine: Engine<A, C>,
    token: CancellationToken,
}

impl<A: Collaborator, C: Clock> RunContext<A, C> {
    pub(crate) fn new(engine: Engine<A, C>, token: CancellationToken) -> Self {
        Self { engine, token }
    }

    pub(crate) async fn run_queue(self) {
        let mut processed = 0usize;
        while !self.token.is_cancelled() {
            let next = self.engine.inner.queue.lock().dequeue_highest();
            let Ok(mut project) = next else {
                break;
            };
            project.begin();
            self.publish(&project);

            let outcome = self.run_project(&mut project).await;
            *self.engine.inner.current.lock() = None;
            processed += 1;
            if outcome == PipelineOutcome::Interrupted {
                tracing::info!(project = %project.id, phase = ?project.phase, "run interrupted");
                break;
            }
        }
        tracing::info!(processed, "run task finished");
    }

    /// Run every phase of one project, restarting from Setup.
    pub(crate) async fn run_project(&self, project: &mut QueuedProject) -> PipelineOutcome {
        let mut phase = Phase::first();
        loop {
            if self.token.is_cancelled() {
                return PipelineOutcome::Interrupted;
            }
            project.phase = Some(phase);
            self.publish(project);

            let config = self.engine.config();
            let attempt = project.retries + 1;
            let start = Instant::now();
            tracing::info!(project = %project.id, %phase, attempt, "phase started");

            match self.run_phase(project, phase, &config).await {
                Ok(PhaseRun::Completed) => {
                    let elapsed_ms = start.elapsed().as_millis() as u64;
                    tracing::info!(project = %project.id, %phase, attempt, elapsed_ms, "phase completed");
                    if phase != Phase::Implement {
                        let at_ms = self.engine.inner.clock.epoch_ms();
                        self.engine.inner.tracker.lock().record_success(project, phase, None, at_ms);
                    }
                    self.engine.emit(Event::PhaseCompleted {
                        project: project.id.clone(),
                        name: project.name.clone(),
                        phase,
                    });
                    match phase.next() {
                        Some(next) => phase = next,
                        None => {
                            project.status = ProjectStatus::Completed;
                            self.publish(project);
                            tracing::info!(project = %project.id, "project completed");
                            self.engine.emit(Event::ProjectCompleted {
                                project: project.id.clone(),
                                name: project.name.clone(),
                            });
                            return PipelineOutcome::Completed;
                        }
                    }
                }
                Ok(PhaseRun::Interrupted) | Err(PhaseError::Shutdown) => {
                    return PipelineOutcome::Interrupted;
                }
                Err(err) => {
                    let error = err.to_string();
                    let at_ms = self.engine.inner.clock.epoch_ms();
                    self.engine.inner.tracker.lock().record_failure(project, phase, &error, at_ms);

                    if project.retries < config.max_retries {
                        project.retries += 1;
                        self.publish(project);
                        tracing::warn!(
                            project = %project.id,
                            %phase,
                            attempt,
                            error = %error,
                            "phase failed, retrying"
                        );
                        if !self.pause(config.retry_backoff()).await {
                            return PipelineOutcome::Interrupted;
                        }
                    } else {
                        project.status = ProjectStatus::Failed;
                        self.publish(project);
                        tracing::error!(
                            project = %project.id,
                            %phase,
                            attempt,
                            error = %error,
                            "retries exhausted, abandoning project"
                        );
                        self.engine.emit(Event::ProjectFailed {
                            project: project.id.clone(),
                            name: project.name.clone(),
                            phase,
                            error,
                        });
                        return PipelineOutcome::Abandoned;
                    }
                }
            }
        }
    }

    pub(crate) async fn run_phase(
        &self,
        project: &QueuedProject,
        phase: Phase,
        config: &NightConfig,
    ) -> Result<PhaseRun, PhaseError> {
        match phase {
            Phase::Setup => {
                for (i, task) in SETUP_TASKS.iter().enumerate() {
                    if i > 0 && !self.pause(config.setup_step_delay()).await {
                        return Ok(PhaseRun::Interrupted);
                    }
                    self.call(project, Task::Setup { task: task.to_string() }, config).await?;
                }
            }
            Phase::Scaffold => {
                let layout = scaffold_layout(&project.tech_stack);
                self.call(project, Task::Scaffold { layout }, config).await?;
            }
            Phase::Implement => {
                for (i, feature) in project.features.iter().enumerate() {
                    if self.token.is_cancelled() {
                        return Ok(PhaseRun::Interrupted);
                    }
                    if i > 0 && !self.pause(config.feature_delay()).await {
                        return Ok(PhaseRun::Interrupted);
                    }
                    let task =
                        Task::ImplementFeature { feature: feature.clone(), brief: project.brief.clone() };
                    self.call(project, task, config).await?;
                    if config.auto_commit {
                        let message = format!("feat: implement {}", feature.name);
                        self.call(project, Task::Commit { message }, config).await?;
                    }
                    let at_ms = self.engine.inner.clock.epoch_ms();
                    self.engine.inner.tracker.lock().record_success(
                        project,
                        Phase::Implement,
                        Some(&feature.name),
                        at_ms,
                    );
                    tracing::debug!(project = %project.id, feature = %feature.name, "feature implemented");
                }
            }
            Phase::Test => {
                if !config.auto_test {
                    tracing::debug!(project = %project.id, "auto_test off, skipping test run");
                    return Ok(PhaseRun::Completed);
                }
                let types = TEST_TYPES.iter().map(|t| t.to_string()).collect();
                let reply = self.call(project, Task::RunTests { types }, config).await?;
                let failures = reply.test_failures();
                if failures > 0 {
                    tracing::info!(project = %project.id, failures, "fixing failing tests");
                    self.call(project, Task::FixTests { failures }, config).await?;
                }
            }
            Phase::Optimize => {
                let passes = OPTIMIZE_PASSES.iter().map(|p| p.to_string()).collect();
                self.call(project, Task::Optimize { passes }, config).await?;
            }
            Phase::Document => {
                let docs = DOCS.iter().map(|d| d.to_string()).collect();
                self.call(project, Task::Document { docs }, config).await?;
                if config.auto_deploy {
                    self.call(project, Task::Deploy, config).await?;
                }
            }
        }
        Ok(PhaseRun::Completed)
    }

    /// Send one request, bounded by the configured deadline and engine shutdown.
    async fn call(
        &self,
        project: &QueuedProject,
        task: Task,
        config: &NightConfig,
    ) -> Result<CollaboratorResponse, PhaseError> {
        let instruction = Instruction::new(project.id.clone(), project.name.clone(), task);
        let action = instruction.action();
        let shutdown = &self.engine.inner.shutdown;
        let request = self.engine.inner.collaborator.request(&instruction);

        let result = match config.collaborator_timeout() {
            Some(after) => tokio::select! {
                _ = shutdown.cancelled() => return Err(PhaseError::Shutdown),
                r = tokio::time::timeout(after, request) => {
                    r.map_err(|_| PhaseError::TimedOut { action, after })?
                }
            },
            None => tokio::select! {
                _ = shutdown.cancelled() => return Err(PhaseError::Shutdown),
                r = request => r,
            },
        };

        let reply = result.map_err(|source| PhaseError::Collaborator { action, source })?;
        if !reply.success {
            return Err(PhaseError::Rejected { action, message: reply.error_message() });
        }
        Ok(reply)
    }

    /// Sleep for `duration`; `false` if the run was cancelled first.
    async fn pause(&self, duration: Duration) -> bool {
        if duration.is_zero() {
            return !self.token.is_cancelled();
        }
        tokio::select! {
            _ = self.token.cancelled() => false,
            _ = tokio::time::sleep(duration) => true,
        }
    }

    fn publish(&self, project: &QueuedProject) {
        *self.engine.inner.current.lock() = Some(project.clone());
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
