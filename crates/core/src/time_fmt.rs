// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration formatting for reports and status lines.

/// Format a span of milliseconds as whole hours and minutes (`7h 3m`).
pub fn format_hours_minutes(ms: u64) -> String {
    let total_minutes = ms / 60_000;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
