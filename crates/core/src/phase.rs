// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Development phases every project passes through, in order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    Scaffold,
    Implement,
    Test,
    Optimize,
    Document,
}

impl Phase {
    /// Pipeline order.
    pub const ALL: [Phase; 6] = [
        Phase::Setup,
        Phase::Scaffold,
        Phase::Implement,
        Phase::Test,
        Phase::Optimize,
        Phase::Document,
    ];

    pub fn first() -> Phase {
        Phase::Setup
    }

    /// The phase after this one, or `None` after Document.
    pub fn next(self) -> Option<Phase> {
        let idx = Self::ALL.iter().position(|p| *p == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    pub fn is_last(self) -> bool {
        self == Phase::Document
    }
}

crate::simple_display! {
    Phase {
        Setup => "setup",
        Scaffold => "scaffold",
        Implement => "implement",
        Test => "test",
        Optimize => "optimize",
        Document => "document",
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
