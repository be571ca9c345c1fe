// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for specs: an engine on a fake collaborator and clock.

pub use ns_adapters::{FakeCollaborator, Task};
pub use ns_core::test_support::{descriptor, fast_config};
pub use ns_core::{Clock, Event, FakeClock, NightConfig, Phase, ProjectDescriptor};
pub use ns_engine::{Engine, EngineDeps, TickAction};
pub use std::time::Duration;

use ns_storage::{ConfigStore, SummaryStore};
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Upper bound for polling loops in specs
pub const SPEC_WAIT_MAX_MS: u64 = 5_000;

pub struct Night {
    pub engine: Engine<FakeCollaborator, FakeClock>,
    pub collaborator: FakeCollaborator,
    pub clock: FakeClock,
    pub events: mpsc::Receiver<Event>,
    pub dir: TempDir,
}

impl Night {
    /// Engine at 01:00 with the default 23:00-06:00 window and no pauses.
    pub fn new() -> Self {
        Self::with(|_| {})
    }

    pub fn with(configure: impl FnOnce(&mut NightConfig)) -> Self {
        let mut config = fast_config();
        configure(&mut config);

        let dir = tempfile::tempdir().unwrap();
        let config_store = ConfigStore::new(dir.path().join("config.toml"));
        config_store.save(&config).unwrap();
        let collaborator = FakeCollaborator::new();
        let clock = FakeClock::at_hour(1);
        let (tx, events) = mpsc::channel(1024);
        let engine = Engine::new(
            EngineDeps {
                collaborator: collaborator.clone(),
                config_store,
                summary_store: SummaryStore::new(dir.path().join("summaries")),
            },
            clock.clone(),
            tx,
        )
        .unwrap();
        Self { engine, collaborator, clock, events, dir }
    }

    pub fn queue(&self, descriptor: ProjectDescriptor) {
        self.engine.enqueue_project(descriptor).unwrap();
    }

    /// Tick inside the window and let the run drain the queue.
    pub async fn run_night(&self) {
        assert_eq!(self.engine.tick().await, TickAction::Activated);
        self.engine.wait_for_run().await;
    }

    /// Move past the window end and tick.
    pub async fn morning(&self) {
        self.clock.set_hour(7);
        assert_eq!(self.engine.tick().await, TickAction::Deactivated);
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Poll `condition` every millisecond until it holds or `max_ms` elapses.
pub async fn wait_for(max_ms: u64, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(max_ms);
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    condition()
}
