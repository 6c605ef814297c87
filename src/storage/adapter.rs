//! File-backed persistence adapter
//!
//! Whole-file semantics only: read everything, overwrite everything.
//! The stores built on top of this never patch a file in place.

use super::StorageResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads and overwrites one file as a single string
pub struct FileAdapter {
    path: PathBuf,
}

impl FileAdapter {
    /// Create an adapter for the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path this adapter reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file, or None if it does not exist yet
    pub fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the whole file, creating parent directories as needed
    pub fn overwrite(&self, content: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}
