// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue ordering and intake specs

use crate::prelude::*;

#[test]
fn higher_priority_runs_first() {
    let night = Night::new();
    night.queue(descriptor("p1", 1));
    night.queue(descriptor("p2", 5));

    let order: Vec<_> = night.engine.queued().into_iter().map(|p| p.id.to_string()).collect();
    assert_eq!(order, vec!["p2", "p1"]);
}

#[tokio::test]
async fn run_follows_priority_then_arrival() {
    let night = Night::new();
    night.queue(descriptor("late-low", 0));
    night.queue(descriptor("first-high", 3));
    night.queue(descriptor("second-high", 3));
    night.run_night().await;

    let setup_order: Vec<String> = night
        .collaborator
        .calls()
        .into_iter()
        .filter(|c| matches!(&c.task, Task::Scaffold { .. }))
        .map(|c| c.project_id.to_string())
        .collect();
    assert_eq!(setup_order, vec!["first-high", "second-high", "late-low"]);
}

#[test]
fn removed_projects_never_run() {
    let night = Night::new();
    night.queue(descriptor("keep", 0));
    night.queue(descriptor("drop", 0));
    night.engine.remove_from_queue("drop").unwrap();
    assert_eq!(night.engine.status().queue_length, 1);
}
