// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run summaries, one JSON document (plus a Markdown rendering) per calendar day.

use crate::fs_util::write_atomic;
use crate::StorageError;
use chrono::NaiveDate;
use ns_core::RunSummary;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SummaryStore {
    dir: PathBuf,
}

impl SummaryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn json_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", date.format("%Y-%m-%d")))
    }

    fn report_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.md", date.format("%Y-%m-%d")))
    }

    /// Store the summary under its date, overwriting any earlier run that day.
    pub fn save(&self, summary: &RunSummary) -> Result<PathBuf, StorageError> {
        let path = self.json_path(summary.date);
        let json = serde_json::to_vec_pretty(summary)
            .map_err(|source| StorageError::Json { path: path.clone(), source })?;
        write_atomic(&path, &json)?;
        write_atomic(&self.report_path(summary.date), summary.render().as_bytes())?;
        tracing::info!(date = %summary.date, path = %path.display(), "run summary saved");
        Ok(path)
    }

    pub fn load(&self, date: NaiveDate) -> Result<RunSummary, StorageError> {
        let path = self.json_path(date);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::SummaryNotFound(date));
            }
            Err(e) => return Err(StorageError::io(&path, e)),
        };
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Json { path, source })
    }
}

#[cfg(test)]
#[path = "summary_store_tests.rs"]
mod tests;
