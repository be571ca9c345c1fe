// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase pipeline and retry specs

use crate::prelude::*;

#[tokio::test]
async fn exhausted_retries_leave_later_phases_untouched() {
    let mut night = Night::with(|c| c.max_retries = 2);
    night.collaborator.fail_action("implement_feature", 3);
    night.queue(descriptor("p1", 0));
    night.run_night().await;

    let records = night.engine.records();
    let implement_failures =
        records.iter().filter(|r| r.phase == Phase::Implement && !r.is_success()).count();
    assert_eq!(implement_failures, 3);
    assert!(!records.iter().any(|r| r.phase == Phase::Test));

    let failed = night.drain_events().into_iter().find_map(|e| match e {
        Event::ProjectFailed { project, phase, .. } => Some((project.to_string(), phase)),
        _ => None,
    });
    assert_eq!(failed, Some(("p1".to_string(), Phase::Implement)));
}

#[tokio::test]
async fn abandoned_project_does_not_block_the_next() {
    let night = Night::with(|c| c.max_retries = 0);
    night.collaborator.fail_action("optimize", 1);
    night.queue(descriptor("first", 2));
    night.queue(descriptor("second", 1));
    night.run_night().await;

    let documented: Vec<String> = night
        .engine
        .records()
        .into_iter()
        .filter(|r| r.phase == Phase::Document)
        .map(|r| r.project.to_string())
        .collect();
    assert_eq!(documented, vec!["second"]);
}

#[tokio::test]
async fn disabled_tests_complete_without_a_request() {
    let night = Night::with(|c| c.auto_test = false);
    night.queue(descriptor("p1", 0));
    night.run_night().await;

    let test_records: Vec<_> =
        night.engine.records().into_iter().filter(|r| r.phase == Phase::Test).collect();
    assert_eq!(test_records.len(), 1);
    assert!(test_records[0].is_success());
    assert_eq!(night.collaborator.count("run_tests"), 0);
    assert_eq!(night.collaborator.count("fix_tests"), 0);
}
