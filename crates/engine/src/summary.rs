// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compiles the run tracker into an end-of-run report.

use crate::tracker::RunTracker;
use chrono::NaiveDate;
use ns_core::{
    format_hours_minutes, Phase, ProjectId, Recommendation, RecommendationPriority, RunSummary,
};
use std::collections::HashMap;

/// Inputs beyond the tracker needed to close out an activation period.
#[derive(Debug, Clone, Copy)]
pub struct SummaryWindow {
    pub date: NaiveDate,
    pub started_at_ms: u64,
    pub ended_at_ms: u64,
    pub remaining_in_queue: usize,
}

pub fn compile(tracker: &RunTracker, window: SummaryWindow) -> RunSummary {
    let tasks_completed = tracker.tasks_completed();
    let errors = tracker.errors().len();

    // A project counts once its most recent success is the final phase
    let mut last_success: HashMap<&ProjectId, Phase> = HashMap::new();
    for record in tracker.completed() {
        last_success.insert(&record.project, record.phase);
    }
    let projects_completed = last_success.values().filter(|phase| phase.is_last()).count();

    let features = tracker.completed().filter(|r| r.phase == Phase::Implement).count();
    let test_runs = tracker.completed().filter(|r| r.phase == Phase::Test).count();

    let mut highlights = Vec::new();
    if projects_completed > 0 {
        highlights.push(format!("{projects_completed} {} completed", plural(projects_completed, "project")));
    }
    if features > 0 {
        highlights.push(format!("{features} {} implemented", plural(features, "feature")));
    }
    if test_runs > 0 {
        highlights.push(format!("{test_runs} test {} run", plural(test_runs, "suite")));
    }

    let mut recommendations = Vec::new();
    if errors > 0 {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::High,
            message: format!("Review {errors} {} from this run", plural(errors, "error")),
        });
    }
    if window.remaining_in_queue > 0 {
        let n = window.remaining_in_queue;
        recommendations.push(Recommendation {
            priority: RecommendationPriority::Medium,
            message: format!(
                "{n} {} still queued; consider a longer window",
                plural(n, "project")
            ),
        });
    }
    if tasks_completed == 0 && errors == 0 {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::Low,
            message: "Queue projects before the next window".to_string(),
        });
    }

    RunSummary {
        date: window.date,
        started_at_ms: window.started_at_ms,
        ended_at_ms: window.ended_at_ms,
        duration: format_hours_minutes(window.ended_at_ms.saturating_sub(window.started_at_ms)),
        projects_completed,
        tasks_completed,
        errors,
        remaining_in_queue: window.remaining_in_queue,
        highlights,
        recommendations,
        error_log: tracker.errors().to_vec(),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
