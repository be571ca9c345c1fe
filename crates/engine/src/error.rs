// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error types

use crate::queue::QueueError;
use chrono::NaiveDate;
use ns_core::{ConfigError, DescriptorError};
use ns_storage::StorageError;
use thiserror::Error;

/// Errors surfaced to callers of the engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid project: {0}")]
    InvalidProject(#[from] DescriptorError),
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("no summary for {0}")]
    SummaryNotFound(NaiveDate),
    #[error("a run is already in progress")]
    RunInProgress,
}
