// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{NightConfig, ProjectDescriptor, QueuedProject};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for queue inputs.
pub mod strategies {
    use proptest::prelude::*;

    /// Priorities drawn from a small range so ties are common.
    pub fn arb_priorities(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-3i64..=3, 0..max_len)
    }
}

// ── Factories ───────────────────────────────────────────────────────────

/// Configuration with every pause disabled so pipeline tests run instantly.
pub fn fast_config() -> NightConfig {
    NightConfig {
        check_interval_ms: 10,
        retry_backoff_ms: 0,
        feature_delay_ms: 0,
        setup_step_delay_ms: 0,
        ..NightConfig::default()
    }
}

/// A descriptor with a fixed id and priority.
pub fn descriptor(id: &str, priority: i64) -> ProjectDescriptor {
    ProjectDescriptor::builder().with_id(id).name(format!("project {id}")).priority(priority).build()
}

/// A queued project built from [`descriptor`].
pub fn queued(id: &str, priority: i64) -> QueuedProject {
    QueuedProject::from_descriptor(descriptor(id, priority), 0)
}
