// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound event channel and the task that drains it.

use ns_adapters::NotifyAdapter;
use ns_core::Event;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Sending half held by the engine. Emitting never waits.
#[derive(Clone)]
pub struct EventEmitter {
    tx: mpsc::Sender<Event>,
}

impl EventEmitter {
    pub fn new(tx: mpsc::Sender<Event>) -> Self {
        Self { tx }
    }

    pub fn emit(&self, event: Event) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(event = event.name(), "event channel full, dropping event");
            }
            Err(TrySendError::Closed(event)) => {
                tracing::trace!(event = event.name(), "event channel closed");
            }
        }
    }
}

/// Logs every event and turns the noteworthy ones into notifications.
pub struct EventDispatcher<N> {
    notifier: N,
}

impl<N: NotifyAdapter> EventDispatcher<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Drain `rx` until every sender is dropped.
    pub async fn run(self, mut rx: mpsc::Receiver<Event>) {
        while let Some(event) = rx.recv().await {
            self.dispatch(&event).await;
        }
        tracing::debug!("event dispatcher stopped");
    }

    pub async fn dispatch(&self, event: &Event) {
        tracing::info!(event = event.name(), "{}", event.log_summary());
        let Some((title, body)) = event.notification() else {
            return;
        };
        if let Err(e) = self.notifier.notify(&title, &body).await {
            tracing::warn!(event = event.name(), error = %e, "notification failed");
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
