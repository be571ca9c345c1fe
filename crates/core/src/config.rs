// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Night-mode configuration and the activation window.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from validating a configuration update
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be between 0 and 23, got {value}")]
    HourOutOfRange { field: &'static str, value: u32 },
    #[error("check_interval_ms must be greater than zero")]
    ZeroCheckInterval,
}

/// Runtime configuration of the engine.
///
/// Every field has a default so a partially written `config.toml` still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightConfig {
    /// First hour (inclusive) of the activation window
    pub start_hour: u32,
    /// Hour (exclusive) at which the activation window closes
    pub end_hour: u32,
    /// Failed phase attempts a project may retry within one run
    pub max_retries: u32,
    /// Scheduler poll period
    pub check_interval_ms: u64,
    pub auto_commit: bool,
    pub auto_test: bool,
    pub auto_deploy: bool,
    /// Pause before retrying a failed phase
    pub retry_backoff_ms: u64,
    /// Pause between features inside Implement
    pub feature_delay_ms: u64,
    /// Pause between Setup sub-tasks
    pub setup_step_delay_ms: u64,
    /// Deadline for a single collaborator request (0 disables it)
    pub collaborator_timeout_ms: u64,
}

impl Default for NightConfig {
    fn default() -> Self {
        Self {
            start_hour: 23,
            end_hour: 6,
            max_retries: 3,
            check_interval_ms: 60_000,
            auto_commit: true,
            auto_test: true,
            auto_deploy: false,
            retry_backoff_ms: 5_000,
            feature_delay_ms: 1_000,
            setup_step_delay_ms: 500,
            collaborator_timeout_ms: 30 * 60 * 1000,
        }
    }
}

impl NightConfig {
    /// Whether `hour` (0-23, local time) falls inside the activation window.
    ///
    /// `start_hour > end_hour` wraps past midnight, `start_hour == end_hour`
    /// covers the whole day. A window that does not wrap is bounded on both
    /// ends (`start <= hour < end`), so a daytime window stays daytime.
    pub fn is_night_time(&self, hour: u32) -> bool {
        let (start, end) = (self.start_hour, self.end_hour);
        if start == end {
            true
        } else if start > end {
            hour >= start || hour < end
        } else {
            hour >= start && hour < end
        }
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn feature_delay(&self) -> Duration {
        Duration::from_millis(self.feature_delay_ms)
    }

    pub fn setup_step_delay(&self) -> Duration {
        Duration::from_millis(self.setup_step_delay_ms)
    }

    pub fn collaborator_timeout(&self) -> Option<Duration> {
        (self.collaborator_timeout_ms > 0).then(|| Duration::from_millis(self.collaborator_timeout_ms))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_hour > 23 {
            return Err(ConfigError::HourOutOfRange { field: "start_hour", value: self.start_hour });
        }
        if self.end_hour > 23 {
            return Err(ConfigError::HourOutOfRange { field: "end_hour", value: self.end_hour });
        }
        if self.check_interval_ms == 0 {
            return Err(ConfigError::ZeroCheckInterval);
        }
        Ok(())
    }

    /// Merge a partial update into a copy of this config, validating the result.
    pub fn merged(&self, patch: &ConfigPatch) -> Result<NightConfig, ConfigError> {
        let mut next = self.clone();
        macro_rules! merge {
            ($($field:ident),+ $(,)?) => {
                $( if let Some(v) = patch.$field { next.$field = v; } )+
            };
        }
        merge!(
            start_hour,
            end_hour,
            max_retries,
            check_interval_ms,
            auto_commit,
            auto_test,
            auto_deploy,
            retry_backoff_ms,
            feature_delay_ms,
            setup_step_delay_ms,
            collaborator_timeout_ms,
        );
        next.validate()?;
        Ok(next)
    }
}

/// Partial configuration update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub start_hour: Option<u32>,
    pub end_hour: Option<u32>,
    pub max_retries: Option<u32>,
    pub check_interval_ms: Option<u64>,
    pub auto_commit: Option<bool>,
    pub auto_test: Option<bool>,
    pub auto_deploy: Option<bool>,
    pub retry_backoff_ms: Option<u64>,
    pub feature_delay_ms: Option<u64>,
    pub setup_step_delay_ms: Option<u64>,
    pub collaborator_timeout_ms: Option<u64>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
