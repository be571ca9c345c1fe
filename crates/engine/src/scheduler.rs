// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-window scheduler: activates runs inside the night window and
//! closes them out when it ends.

use crate::engine::{Engine, RunState};
use crate::error::EngineError;
use crate::pipeline::RunContext;
use crate::summary::{compile, SummaryWindow};
use ns_adapters::Collaborator;
use ns_core::{Clock, Event, RunError, RunSummary};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What a single scheduler tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    Activated,
    /// Started another run task inside an already active period
    Resumed,
    Deactivated,
    Idle,
}

impl<A: Collaborator, C: Clock> Engine<A, C> {
    /// Evaluate the window once and start or stop a run as needed.
    pub async fn tick(&self) -> TickAction {
        let config = self.config();
        let hour = self.inner.clock.local_hour();
        let in_window = config.is_night_time(hour);
        let has_work = !self.inner.queue.lock().is_empty();

        match (in_window, self.is_active()) {
            (true, false) if has_work => match self.activate() {
                Ok(()) => TickAction::Activated,
                Err(e) => {
                    tracing::error!(error = %e, "activation failed");
                    self.record_error(RunError::scheduler(
                        format!("activation failed: {e}"),
                        self.inner.clock.epoch_ms(),
                    ));
                    TickAction::Idle
                }
            },
            (true, true) if has_work => {
                let stale = {
                    let mut run = self.inner.run.lock();
                    if !run.active || run.task_running() {
                        return TickAction::Idle;
                    }
                    tracing::info!("new projects queued during active window, resuming");
                    self.spawn_run(&mut run)
                };
                if let Some(stale) = stale {
                    self.reap(stale).await;
                }
                TickAction::Resumed
            }
            (false, true) => {
                self.deactivate().await;
                TickAction::Deactivated
            }
            _ => TickAction::Idle,
        }
    }

    /// Poll the window every `check_interval_ms` (or `interval_override`)
    /// until the engine shuts down.
    pub async fn run_scheduler(self, interval_override: Option<Duration>) {
        tracing::info!("scheduler started");
        loop {
            let action = self.tick().await;
            if action != TickAction::Idle {
                tracing::debug!(?action, "scheduler tick");
            }
            let interval = interval_override.unwrap_or_else(|| self.config().check_interval());
            tokio::select! {
                _ = self.inner.shutdown.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }
        tracing::info!("scheduler stopped");
    }

    /// Enter night mode and start draining the queue.
    pub fn activate(&self) -> Result<(), EngineError> {
        let mut run = self.inner.run.lock();
        if run.active || run.task_running() {
            return Err(EngineError::RunInProgress);
        }
        let at_ms = self.inner.clock.epoch_ms();
        run.active = true;
        run.started_at_ms = at_ms;
        let stale = self.spawn_run(&mut run);
        drop(run);
        if let Some(stale) = stale {
            let engine = self.clone();
            tokio::spawn(async move { engine.reap(stale).await });
        }

        tracing::info!(queue_length = self.inner.queue.lock().len(), "night mode activated");
        self.emit(Event::Activated { at_ms });
        Ok(())
    }

    /// Leave night mode: stop the run, persist the summary, reset the tracker.
    ///
    /// An in-flight collaborator request is allowed to finish first.
    pub async fn deactivate(&self) -> RunSummary {
        let (token, task, started_at_ms) = {
            let mut run = self.inner.run.lock();
            run.active = false;
            (run.token.take(), run.task.take(), run.started_at_ms)
        };
        if let Some(token) = token {
            token.cancel();
        }
        if let Some(task) = task {
            self.reap(task).await;
        }

        let ended_at_ms = self.inner.clock.epoch_ms();
        let window = SummaryWindow {
            date: self.inner.clock.local_date(),
            started_at_ms,
            ended_at_ms,
            remaining_in_queue: self.inner.queue.lock().len(),
        };
        let summary = {
            let mut tracker = self.inner.tracker.lock();
            let summary = compile(&tracker, window);
            tracker.reset();
            summary
        };
        *self.inner.current.lock() = None;

        match self.inner.summary_store.save(&summary) {
            Ok(path) => tracing::debug!(path = %path.display(), "summary persisted"),
            Err(e) => {
                tracing::error!(error = %e, "failed to persist run summary");
                self.record_error(RunError::scheduler(
                    format!("failed to persist run summary: {e}"),
                    ended_at_ms,
                ));
            }
        }

        tracing::info!(
            duration = %summary.duration,
            projects_completed = summary.projects_completed,
            tasks_completed = summary.tasks_completed,
            errors = summary.errors,
            "night mode deactivated"
        );
        self.emit(Event::Deactivated { at_ms: ended_at_ms, summary: Box::new(summary.clone()) });
        summary
    }

    /// Start a run task, returning the handle of the previous (stopped) one.
    fn spawn_run(&self, run: &mut RunState) -> Option<JoinHandle<()>> {
        let token = self.inner.shutdown.child_token();
        let context = RunContext::new(self.clone(), token.clone());
        let (finished_tx, finished_rx) = watch::channel(false);
        run.token = Some(token);
        run.finished = Some(finished_rx);
        run.task.replace(tokio::spawn(async move {
            let _finished = FinishedGuard(finished_tx);
            context.run_queue().await;
        }))
    }
}

/// Marks the run finished when the task ends, including by panic.
struct FinishedGuard(watch::Sender<bool>);

impl Drop for FinishedGuard {
    fn drop(&mut self) {
        self.0.send_replace(true);
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
