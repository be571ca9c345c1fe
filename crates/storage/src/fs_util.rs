// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic file replacement.

use crate::StorageError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replace `path` with `contents` via a temp file and rename, so readers
/// never observe a half-written document.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }
    let tmp = sibling(path, ".tmp");
    {
        let mut file = fs::File::create(&tmp).map_err(|e| StorageError::io(&tmp, e))?;
        file.write_all(contents).map_err(|e| StorageError::io(&tmp, e))?;
        file.sync_all().map_err(|e| StorageError::io(&tmp, e))?;
    }
    fs::rename(&tmp, path).map_err(|e| StorageError::io(path, e))
}

/// Copy the current file to `<path>.bak` before it is replaced.
///
/// Missing files are not an error; a failed backup only logs.
pub(crate) fn backup(path: &Path) {
    if !path.exists() {
        return;
    }
    let bak = sibling(path, ".bak");
    if let Err(e) = fs::copy(path, &bak) {
        tracing::warn!(path = %path.display(), error = %e, "failed to back up file");
    }
}

/// `path` with `suffix` appended to the full file name (`a.json` -> `a.json.tmp`).
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
