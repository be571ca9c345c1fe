// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_returns_increasing_time() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    let t2 = clock.now();
    assert!(t2 > t1);
}

#[test]
fn fake_clock_starts_at_noon_utc() {
    let clock = FakeClock::new();
    assert_eq!(clock.local_hour(), 12);
    assert_eq!(clock.local_date().to_string(), "2026-01-15");
}

#[test]
fn fake_clock_advance_moves_instant_epoch_and_hour() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    let e1 = clock.epoch_ms();
    clock.advance(Duration::from_secs(3600));
    assert!(clock.now().duration_since(t1) >= Duration::from_secs(3600));
    assert_eq!(clock.epoch_ms() - e1, 3_600_000);
    assert_eq!(clock.local_hour(), 13);
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    clock2.advance(Duration::from_secs(30));
    assert_eq!(clock1.epoch_ms(), clock2.epoch_ms());
}

#[test]
fn set_hour_moves_forward_same_day() {
    let clock = FakeClock::new();
    clock.set_hour(23);
    assert_eq!(clock.local_hour(), 23);
    assert_eq!(clock.local_date().to_string(), "2026-01-15");
}

#[test]
fn set_hour_earlier_rolls_to_next_day() {
    let clock = FakeClock::at_hour(23);
    clock.set_hour(6);
    assert_eq!(clock.local_hour(), 6);
    assert_eq!(clock.local_date().to_string(), "2026-01-16");
}
