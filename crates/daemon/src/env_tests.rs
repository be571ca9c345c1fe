// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn state_dir_prefers_explicit_override() {
    std::env::set_var("NS_STATE_DIR", "/tmp/ns-state");
    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg");
    assert_eq!(state_dir().unwrap(), PathBuf::from("/tmp/ns-state"));
    std::env::remove_var("NS_STATE_DIR");
    std::env::remove_var("XDG_STATE_HOME");
}

#[test]
#[serial]
fn state_dir_falls_back_to_xdg() {
    std::env::remove_var("NS_STATE_DIR");
    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg");
    assert_eq!(state_dir().unwrap(), PathBuf::from("/tmp/xdg/nightshift"));
    std::env::remove_var("XDG_STATE_HOME");
}

#[test]
#[serial]
fn tick_interval_ignores_garbage_and_zero() {
    std::env::set_var("NS_TICK_MS", "250");
    assert_eq!(tick_interval(), Some(Duration::from_millis(250)));
    std::env::set_var("NS_TICK_MS", "0");
    assert_eq!(tick_interval(), None);
    std::env::set_var("NS_TICK_MS", "soon");
    assert_eq!(tick_interval(), None);
    std::env::remove_var("NS_TICK_MS");
}

#[test]
#[serial]
fn notifications_can_be_disabled() {
    std::env::remove_var("NS_NOTIFY");
    assert!(notifications_enabled());
    std::env::set_var("NS_NOTIFY", "off");
    assert!(!notifications_enabled());
    std::env::remove_var("NS_NOTIFY");
}

#[test]
#[serial]
fn blank_collaborator_command_is_unset() {
    std::env::set_var("NS_COLLABORATOR_CMD", "   ");
    assert_eq!(collaborator_command(), None);
    std::env::set_var("NS_COLLABORATOR_CMD", "agent --json");
    assert_eq!(collaborator_command().as_deref(), Some("agent --json"));
    std::env::remove_var("NS_COLLABORATOR_CMD");
}
