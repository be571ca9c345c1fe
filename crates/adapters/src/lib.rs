// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: the collaborator backend and notifications

pub mod collaborator;
pub mod notify;

pub use collaborator::{
    Collaborator, CollaboratorError, CollaboratorResponse, CommandCollaborator, Instruction, Task,
};
pub use notify::{DesktopNotifyAdapter, NoopNotifyAdapter, NotifyAdapter, NotifyError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use collaborator::FakeCollaborator;
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
