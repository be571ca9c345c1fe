// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ns_core::test_support::queued;

#[test]
fn failures_go_to_both_ledgers() {
    let project = queued("p1", 0);
    let mut tracker = RunTracker::new();
    tracker.record_success(&project, Phase::Setup, None, 1);
    tracker.record_failure(&project, Phase::Scaffold, "boom", 2);

    assert_eq!(tracker.records().len(), 2);
    assert_eq!(tracker.tasks_completed(), 1);
    assert_eq!(tracker.errors().len(), 1);
    assert_eq!(tracker.errors()[0].phase, Some(Phase::Scaffold));
    assert_eq!(tracker.errors()[0].error, "boom");
}

#[test]
fn records_keep_completion_order() {
    let project = queued("p1", 0);
    let mut tracker = RunTracker::new();
    tracker.record_success(&project, Phase::Implement, Some("login"), 5);
    tracker.record_success(&project, Phase::Implement, Some("cart"), 6);
    let features: Vec<_> = tracker.records().iter().filter_map(|r| r.feature.as_deref()).collect();
    assert_eq!(features, vec!["login", "cart"]);
}

#[test]
fn reset_clears_everything() {
    let project = queued("p1", 0);
    let mut tracker = RunTracker::new();
    tracker.record_failure(&project, Phase::Test, "red", 1);
    tracker.record_error(RunError::scheduler("store", 2));
    tracker.reset();
    assert!(tracker.records().is_empty());
    assert!(tracker.errors().is_empty());
}
