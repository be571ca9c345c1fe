// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification sink for run events.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for delivering operator notifications
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Send a notification with a title and message body
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

/// Desktop notifications through `notify-rust`.
///
/// `show()` blocks on some platforms, so delivery runs on the blocking pool.
/// A delivery still pending after [`Self::SHOW_TIMEOUT`] is left to finish
/// in the background.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifyAdapter;

impl DesktopNotifyAdapter {
    pub const APP_NAME: &'static str = "Night Shift";
    pub const SHOW_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let summary = title.to_string();
        let body = message.to_string();
        let show = tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(Self::APP_NAME)
                .summary(&summary)
                .body(&body)
                .show()
                .map(|_| ())
                .map_err(|e| e.to_string())
        });
        match tokio::time::timeout(Self::SHOW_TIMEOUT, show).await {
            Ok(Ok(Ok(()))) => {
                tracing::debug!(%title, "desktop notification sent");
                Ok(())
            }
            Ok(Ok(Err(e))) => Err(NotifyError::SendFailed(e)),
            Ok(Err(e)) => Err(NotifyError::SendFailed(e.to_string())),
            Err(_) => {
                tracing::debug!(%title, "desktop notification still pending, not waiting");
                Ok(())
            }
        }
    }
}

/// Discards notifications (headless hosts).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifyAdapter;

#[async_trait]
impl NotifyAdapter for NoopNotifyAdapter {
    async fn notify(&self, title: &str, _message: &str) -> Result<(), NotifyError> {
        tracing::trace!(%title, "notification discarded");
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{NotifyAdapter, NotifyError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NotifyCall {
        pub title: String,
        pub message: String,
    }

    /// Fake notification adapter that records every call
    #[derive(Clone, Default)]
    pub struct FakeNotifyAdapter {
        calls: Arc<Mutex<Vec<NotifyCall>>>,
        failures: Arc<Mutex<u32>>,
    }

    impl FakeNotifyAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<NotifyCall> {
            self.calls.lock().clone()
        }

        pub fn titles(&self) -> Vec<String> {
            self.calls.lock().iter().map(|c| c.title.clone()).collect()
        }

        /// Fail the next `times` deliveries; failed calls are not recorded.
        pub fn fail_next(&self, times: u32) -> &Self {
            *self.failures.lock() = times;
            self
        }
    }

    #[async_trait]
    impl NotifyAdapter for FakeNotifyAdapter {
        async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
            {
                let mut failures = self.failures.lock();
                if *failures > 0 {
                    *failures -= 1;
                    return Err(NotifyError::SendFailed(format!("scripted failure for {title}")));
                }
            }
            self.calls
                .lock()
                .push(NotifyCall { title: title.to_string(), message: message.to_string() });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
