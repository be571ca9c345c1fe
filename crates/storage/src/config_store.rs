// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted engine configuration (`config.toml`).

use crate::fs_util::{backup, write_atomic};
use crate::StorageError;
use ns_core::NightConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored config; a missing file yields the defaults and missing
    /// fields fall back individually.
    pub fn load(&self) -> Result<NightConfig, StorageError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no config file, using defaults");
                return Ok(NightConfig::default());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };
        toml::from_str(&text).map_err(|source| StorageError::TomlDe { path: self.path.clone(), source })
    }

    /// Replace the stored document wholesale.
    pub fn save(&self, config: &NightConfig) -> Result<(), StorageError> {
        let text = toml::to_string_pretty(config)?;
        backup(&self.path);
        write_atomic(&self.path, text.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_store_tests.rs"]
mod tests;
