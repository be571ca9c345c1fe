// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Activation window specs

use crate::prelude::*;

#[tokio::test]
async fn daytime_tick_does_nothing() {
    let night = Night::new();
    night.clock.set_hour(10);
    night.queue(descriptor("p1", 0));

    assert_eq!(night.engine.tick().await, TickAction::Idle);
    assert!(!night.engine.status().is_active);
    assert!(night.collaborator.calls().is_empty());
}

#[tokio::test]
async fn morning_interrupts_implement_and_keeps_finished_features() {
    let night = Night::new();
    night.collaborator.delay_action("implement_feature", Duration::from_millis(100));
    night.queue(
        ProjectDescriptor::builder()
            .with_id("p1")
            .feature_names(&["auth", "feed", "search", "profile", "settings"])
            .build(),
    );

    assert_eq!(night.engine.tick().await, TickAction::Activated);
    let second_started =
        wait_for(SPEC_WAIT_MAX_MS, || night.collaborator.count("implement_feature") == 2).await;
    assert!(second_started);
    night.morning().await;

    let summary = night.engine.summary(night.clock.local_date()).unwrap();
    assert_eq!(summary.projects_completed, 0);
    assert_eq!(summary.tasks_completed, 4);
    let implemented = night.collaborator.count("implement_feature");
    assert_eq!(implemented, 2);
}

#[tokio::test]
async fn status_reads_do_not_change_state() {
    let night = Night::new();
    night.queue(descriptor("p1", 0));
    night.run_night().await;

    let before = night.engine.status();
    assert_eq!(night.engine.status(), before);
    assert!(before.is_active);
    assert_eq!(before.progress.tasks_completed, 7);
}

#[tokio::test]
async fn config_updates_apply_on_next_tick() {
    let night = Night::new();
    night.queue(descriptor("p1", 0));
    night.clock.set_hour(20);
    assert_eq!(night.engine.tick().await, TickAction::Idle);

    let patch = ns_core::ConfigPatch { start_hour: Some(20), ..Default::default() };
    night.engine.update_configuration(&patch).unwrap();
    assert_eq!(night.engine.tick().await, TickAction::Activated);
    night.engine.shutdown().await;
}
