// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted collaborator for tests.

use super::{Collaborator, CollaboratorError, CollaboratorResponse, Instruction};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

type Hook = Arc<dyn Fn(&Instruction) + Send + Sync>;

#[derive(Default)]
struct FakeCollaboratorState {
    calls: Vec<Instruction>,
    /// Remaining `success=false` replies per action
    failures: HashMap<String, u32>,
    /// Remaining transport errors per action
    errors: HashMap<String, u32>,
    /// Sticky replies per action
    responses: HashMap<String, CollaboratorResponse>,
    delays: HashMap<String, Duration>,
    hook: Option<Hook>,
}

/// Fake collaborator that records every instruction and replies from a script.
///
/// Unscripted actions succeed.
#[derive(Clone, Default)]
pub struct FakeCollaborator {
    inner: Arc<Mutex<FakeCollaboratorState>>,
}

impl FakeCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply `success=false` to the next `times` requests for `action`.
    pub fn fail_action(&self, action: &str, times: u32) -> &Self {
        self.inner.lock().failures.insert(action.to_string(), times);
        self
    }

    /// Return a transport error for the next `times` requests for `action`.
    pub fn error_action(&self, action: &str, times: u32) -> &Self {
        self.inner.lock().errors.insert(action.to_string(), times);
        self
    }

    /// Always reply with `response` for `action` (after scripted failures).
    pub fn respond(&self, action: &str, response: CollaboratorResponse) -> &Self {
        self.inner.lock().responses.insert(action.to_string(), response);
        self
    }

    /// Sleep before replying to `action`.
    pub fn delay_action(&self, action: &str, delay: Duration) -> &Self {
        self.inner.lock().delays.insert(action.to_string(), delay);
        self
    }

    /// Run `hook` after each request has been recorded, before replying.
    pub fn on_request(&self, hook: impl Fn(&Instruction) + Send + Sync + 'static) -> &Self {
        self.inner.lock().hook = Some(Arc::new(hook));
        self
    }

    pub fn calls(&self) -> Vec<Instruction> {
        self.inner.lock().calls.clone()
    }

    /// Actions in request order.
    pub fn actions(&self) -> Vec<&'static str> {
        self.inner.lock().calls.iter().map(Instruction::action).collect()
    }

    pub fn count(&self, action: &str) -> usize {
        self.inner.lock().calls.iter().filter(|c| c.action() == action).count()
    }
}

fn take_one(map: &mut HashMap<String, u32>, action: &str) -> bool {
    match map.get_mut(action) {
        Some(n) if *n > 0 => {
            *n -= 1;
            true
        }
        _ => false,
    }
}

#[async_trait]
impl Collaborator for FakeCollaborator {
    async fn request(
        &self,
        instruction: &Instruction,
    ) -> Result<CollaboratorResponse, CollaboratorError> {
        let action = instruction.action();
        let (hook, delay) = {
            let mut state = self.inner.lock();
            state.calls.push(instruction.clone());
            (state.hook.clone(), state.delays.get(action).copied())
        };
        if let Some(hook) = hook {
            hook(instruction);
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.inner.lock();
        if take_one(&mut state.errors, action) {
            return Err(CollaboratorError::Unavailable(format!("scripted error for {action}")));
        }
        if take_one(&mut state.failures, action) {
            return Ok(CollaboratorResponse::failed(format!("scripted failure for {action}")));
        }
        Ok(state.responses.get(action).cloned().unwrap_or_else(CollaboratorResponse::ok))
    }
}
