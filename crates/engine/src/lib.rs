// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Night Shift orchestration engine: queue, phase pipeline, scheduler, and
//! run summaries

mod dispatcher;
mod engine;
mod error;
mod layout;
mod pipeline;
mod queue;
mod scheduler;
mod summary;
mod tracker;

#[cfg(test)]
mod test_helpers;

pub use dispatcher::{EventDispatcher, EventEmitter};
pub use engine::{CurrentProject, Engine, EngineDeps, Progress, StatusSnapshot};
pub use error::EngineError;
pub use layout::scaffold_layout;
pub use pipeline::{PhaseError, PhaseRun, PipelineOutcome};
pub use queue::{ProjectQueue, QueueError};
pub use scheduler::TickAction;
pub use summary::{compile as compile_summary, SummaryWindow};
pub use tracker::RunTracker;
