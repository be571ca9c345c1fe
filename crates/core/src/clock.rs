// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// A clock that provides the current time
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;
    fn epoch_ms(&self) -> u64;
    /// Wall-clock time in the operator's local timezone (drives the activation window).
    fn local_now(&self) -> DateTime<FixedOffset>;

    /// Hour of day (0-23) in local time.
    fn local_hour(&self) -> u32 {
        self.local_now().hour()
    }

    /// Local calendar date, used to key run summaries.
    fn local_date(&self) -> NaiveDate {
        self.local_now().date_naive()
    }
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
    }

    fn local_now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// 2026-01-15T12:00:00Z
const FAKE_EPOCH_START_MS: u64 = 1_768_478_400_000;

/// Fake clock for testing with controllable time.
///
/// Local time is UTC, derived from the fake epoch milliseconds, so moving the
/// epoch also moves the hour the scheduler sees.
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<Instant>>,
    epoch_ms: Arc<Mutex<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
            epoch_ms: Arc::new(Mutex::new(FAKE_EPOCH_START_MS)),
        }
    }

    /// Create a clock positioned at `hour:00` on the fake start date.
    pub fn at_hour(hour: u32) -> Self {
        let clock = Self::new();
        clock.set_hour(hour);
        clock
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        *self.current.lock() += duration;
        *self.epoch_ms.lock() += duration.as_millis() as u64;
    }

    /// Move forward to the next `hour:00` (same day if still ahead, else the next day).
    pub fn set_hour(&self, hour: u32) {
        let now = self.local_now();
        let today = now.date_naive();
        let Some(target) = today.and_hms_opt(hour % 24, 0, 0) else {
            return;
        };
        let mut target_ms = target.and_utc().timestamp_millis();
        let now_ms = now.timestamp_millis();
        if target_ms < now_ms {
            target_ms += 24 * 60 * 60 * 1000;
        }
        self.advance(Duration::from_millis((target_ms - now_ms) as u64));
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.current.lock()
    }

    fn epoch_ms(&self) -> u64 {
        *self.epoch_ms.lock()
    }

    fn local_now(&self) -> DateTime<FixedOffset> {
        DateTime::<Utc>::from_timestamp_millis(self.epoch_ms() as i64)
            .unwrap_or_default()
            .fixed_offset()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
