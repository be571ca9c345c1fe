// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ns_adapters::FakeNotifyAdapter;
use ns_core::{Phase, ProjectId};

fn completed(id: &str) -> Event {
    Event::ProjectCompleted { project: ProjectId::new(id), name: format!("project {id}") }
}

#[test]
fn emit_drops_when_full() {
    let (tx, mut rx) = mpsc::channel(1);
    let emitter = EventEmitter::new(tx);
    emitter.emit(completed("p1"));
    emitter.emit(completed("p2"));
    assert_eq!(rx.try_recv().ok(), Some(completed("p1")));
    assert!(rx.try_recv().is_err());
}

#[test]
fn emit_ignores_closed_channel() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    EventEmitter::new(tx).emit(completed("p1"));
}

#[tokio::test]
async fn dispatcher_notifies_only_for_noteworthy_events() {
    let notifier = FakeNotifyAdapter::new();
    let (tx, rx) = mpsc::channel(8);
    tx.send(Event::Activated { at_ms: 1 }).await.unwrap();
    tx.send(Event::PhaseCompleted {
        project: ProjectId::new("p1"),
        name: "shop".into(),
        phase: Phase::Setup,
    })
    .await
    .unwrap();
    tx.send(completed("p1")).await.unwrap();
    drop(tx);

    EventDispatcher::new(notifier.clone()).run(rx).await;

    assert_eq!(notifier.titles(), vec!["Project completed"]);
    assert_eq!(notifier.calls()[0].message, "project p1 finished all phases");
}

#[tokio::test]
async fn failed_notification_does_not_stop_the_dispatcher() {
    let notifier = FakeNotifyAdapter::new();
    notifier.fail_next(1);
    let (tx, rx) = mpsc::channel(8);
    tx.send(completed("p1")).await.unwrap();
    tx.send(completed("p2")).await.unwrap();
    drop(tx);

    EventDispatcher::new(notifier.clone()).run(rx).await;

    assert_eq!(notifier.calls().len(), 1);
    assert_eq!(notifier.calls()[0].message, "project p2 finished all phases");
}
