//! File-backed slot storage with atomic overwrite
//!
//! One file holds the whole slot. Writes go to a sibling temp file first and
//! are renamed into place, so a reader never observes a half-written record
//! even if the process dies mid-write.

use std::path::{Path, PathBuf};

use crate::components::store::StorageBackend;
use crate::components::{AlarmError, AlarmResult};

/// File name of the durable slot inside its directory
pub const SLOT_FILE_NAME: &str = "ScheduledAlarm";

/// Durable single-file storage backend
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use an explicit file path as the slot
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Place the slot file inside `dir` under its conventional name
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SLOT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl StorageBackend for FileStorage {
    fn read(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<Option<Vec<u8>>>> + Send + '_>>
    {
        Box::pin(async move {
            match tokio::fs::read(&self.path).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(AlarmError::Storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                ))),
            }
        })
    }

    fn write(
        &self,
        bytes: Vec<u8>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>> {
        Box::pin(async move {
            let temp = self.temp_path();
            tokio::fs::write(&temp, &bytes).await.map_err(|e| {
                AlarmError::Storage(format!("failed to write {}: {e}", temp.display()))
            })?;
            // Rename is the atomic swap; the slot is either the old bytes or
            // the new bytes, never a mix.
            tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
                AlarmError::Storage(format!("failed to replace {}: {e}", self.path.display()))
            })
        })
    }

    fn delete(
        &self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = AlarmResult<()>> + Send + '_>> {
        Box::pin(async move {
            match tokio::fs::remove_file(&self.path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AlarmError::Storage(format!(
                    "failed to delete {}: {e}",
                    self.path.display()
                ))),
            }
        })
    }
}
