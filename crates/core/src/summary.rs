// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-run report.

use crate::record::RunError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

crate::simple_display! {
    RecommendationPriority {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub message: String,
}

/// Summary of one activation period, persisted once per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub date: NaiveDate,
    pub started_at_ms: u64,
    pub ended_at_ms: u64,
    /// Human formatted `Xh Ym`
    pub duration: String,
    pub projects_completed: usize,
    pub tasks_completed: usize,
    pub errors: usize,
    pub remaining_in_queue: usize,
    pub highlights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub error_log: Vec<RunError>,
}

impl RunSummary {
    /// Markdown rendering written alongside the JSON document.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Night run {}", self.date);
        let _ = writeln!(out);
        let _ = writeln!(out, "- Duration: {}", self.duration);
        let _ = writeln!(out, "- Projects completed: {}", self.projects_completed);
        let _ = writeln!(out, "- Tasks completed: {}", self.tasks_completed);
        let _ = writeln!(out, "- Errors: {}", self.errors);

        if !self.highlights.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Highlights");
            let _ = writeln!(out);
            for h in &self.highlights {
                let _ = writeln!(out, "- {h}");
            }
        }

        if !self.recommendations.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Recommendations");
            let _ = writeln!(out);
            for r in &self.recommendations {
                let _ = writeln!(out, "- [{}] {}", r.priority, r.message);
            }
        }

        if !self.error_log.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Errors");
            let _ = writeln!(out);
            for e in &self.error_log {
                let location = match (&e.project, e.phase) {
                    (Some(p), Some(phase)) => format!("{p}/{phase}"),
                    (Some(p), None) => p.to_string(),
                    _ => "scheduler".to_string(),
                };
                let _ = writeln!(out, "- {location}: {}", e.error);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
