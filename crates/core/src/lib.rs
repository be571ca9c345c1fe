// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ns-core: shared types for the Night Shift orchestration engine

pub mod macros;

pub mod clock;
pub mod config;
pub mod event;
pub mod id;
pub mod phase;
pub mod project;
pub mod record;
pub mod summary;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, ConfigPatch, NightConfig};
pub use event::Event;
pub use phase::Phase;
#[cfg(any(test, feature = "test-support"))]
pub use project::DescriptorBuilder;
pub use project::{
    Brief, DescriptorError, Feature, ProjectDescriptor, ProjectId, ProjectStatus, QueuedProject,
};
pub use record::{PhaseOutcome, PhaseRecord, RunError};
pub use summary::{Recommendation, RecommendationPriority, RunSummary};
pub use time_fmt::format_hours_minutes;
