// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run summary specs

use crate::prelude::*;

#[tokio::test]
async fn summary_is_persisted_and_reads_back() {
    let mut night = Night::new();
    night.queue(descriptor("p1", 0));
    night.run_night().await;
    night.morning().await;

    let deactivated = night.drain_events().into_iter().find_map(|e| match e {
        Event::Deactivated { summary, .. } => Some(*summary),
        _ => None,
    });
    let deactivated = deactivated.unwrap();
    let stored = night.engine.summary(night.clock.local_date()).unwrap();
    assert_eq!(stored, deactivated);

    let json = std::fs::read_to_string(night.dir.path().join("summaries/2026-01-16.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["duration"], "6h 0m");
    assert_eq!(value["projects_completed"], 1);
}

#[tokio::test]
async fn markdown_report_is_written_alongside() {
    let night = Night::new();
    night.queue(descriptor("p1", 0));
    night.run_night().await;
    night.morning().await;

    let report = std::fs::read_to_string(night.dir.path().join("summaries/2026-01-16.md")).unwrap();
    similar_asserts::assert_eq!(
        report,
        "# Night run 2026-01-16\n\
         \n\
         - Duration: 6h 0m\n\
         - Projects completed: 1\n\
         - Tasks completed: 7\n\
         - Errors: 0\n\
         \n\
         ## Highlights\n\
         \n\
         - 1 project completed\n\
         - 2 features implemented\n\
         - 1 test suite run\n"
    );
}

#[tokio::test]
async fn tracker_starts_fresh_after_morning() {
    let night = Night::with(|c| c.max_retries = 0);
    night.collaborator.fail_action("scaffold", 1);
    night.queue(descriptor("p1", 0));
    night.run_night().await;
    assert_eq!(night.engine.status().progress.errors, 1);

    night.morning().await;
    let status = night.engine.status();
    assert_eq!(status.progress.errors, 0);
    assert_eq!(status.progress.tasks_completed, 0);

    let summary = night.engine.summary(night.clock.local_date()).unwrap();
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.error_log[0].phase, Some(Phase::Scaffold));
}
