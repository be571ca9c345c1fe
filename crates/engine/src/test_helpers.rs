// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test harness for engine tests.

use crate::engine::{Engine, EngineDeps};
use ns_adapters::FakeCollaborator;
use ns_core::test_support::fast_config;
use ns_core::{Event, FakeClock, NightConfig, ProjectDescriptor, QueuedProject};
use ns_storage::{ConfigStore, SummaryStore};
use tempfile::TempDir;
use tokio::sync::mpsc;

pub(crate) type TestEngine = Engine<FakeCollaborator, FakeClock>;

/// Engine wired to a fake collaborator, a fake clock at 01:00 and stores in a
/// temp dir.
pub(crate) struct TestContext {
    pub engine: TestEngine,
    pub collaborator: FakeCollaborator,
    pub clock: FakeClock,
    pub events: mpsc::Receiver<Event>,
    pub dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(fast_config())
    }

    pub fn with_config(config: NightConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config_store = ConfigStore::new(dir.path().join("config.toml"));
        config_store.save(&config).unwrap();
        let summary_store = SummaryStore::new(dir.path().join("summaries"));

        let collaborator = FakeCollaborator::new();
        let clock = FakeClock::at_hour(1);
        let (tx, events) = mpsc::channel(1024);
        let engine = Engine::new(
            EngineDeps { collaborator: collaborator.clone(), config_store, summary_store },
            clock.clone(),
            tx,
        )
        .unwrap();
        Self { engine, collaborator, clock, events, dir }
    }

    pub fn enqueue(&self, descriptor: ProjectDescriptor) -> QueuedProject {
        self.engine.enqueue_project(descriptor).unwrap()
    }

    /// Activate and wait for the run task to drain the queue.
    pub async fn run_to_idle(&self) {
        self.engine.activate().unwrap();
        self.engine.wait_for_run().await;
    }

    pub fn event_names(&mut self) -> Vec<&'static str> {
        let mut names = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            names.push(event.name());
        }
        names
    }
}
