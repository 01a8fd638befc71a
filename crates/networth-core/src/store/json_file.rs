//! JSON file store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::traits::StateStore;
use crate::error::{LedgerError, Result};
use crate::fs::write_atomic;

/// Stores the state document as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Move the file to a `<name>.corrupt-<timestamp>` sibling and return
    /// that path. The store's own path is free afterwards.
    pub fn set_aside(&self) -> Result<PathBuf> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S").to_string();
        let target = free_sibling(&self.path, &format!("corrupt-{stamp}"));
        // Plain rename: the fallback in `fs` deletes its source on failure.
        fs::rename(&self.path, &target).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to move {} aside: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::warn!(
            from = %self.path.display(),
            to = %target.display(),
            "unreadable state set aside"
        );
        Ok(target)
    }
}

/// `<path>.<suffix>`, or `<path>.<suffix>-N` when that is taken.
fn free_sibling(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "networth.json".to_string());
    let mut candidate = path.with_file_name(format!("{name}.{suffix}"));
    let mut n = 1;
    while candidate.exists() {
        candidate = path.with_file_name(format!("{name}.{suffix}-{n}"));
        n += 1;
    }
    candidate
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LedgerError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        write_atomic(&self.path, blob.as_bytes()).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), bytes = blob.len(), "state saved");
        Ok(())
    }
}
