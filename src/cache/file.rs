// ABOUTME: File-backed storage backend persisting one file per cache key
// ABOUTME: The durable analog of origin-scoped browser storage; all operations fallible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

use super::StorageBackend;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed storage backend.
///
/// Each key maps to one file in the store directory; the file name is the
/// percent-encoded key, so arbitrary key characters stay filesystem-safe on
/// every platform. Values are stored as-is (they are already obfuscated by
/// the cache codec).
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|error| {
            AppError::storage(format!(
                "cannot create cache directory {}: {error}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    /// Directory this store persists into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(urlencoding::encode(key).into_owned())
    }
}

impl StorageBackend for FileStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(AppError::storage(format!("cache read failed: {error}"))),
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.path_for(key), value)
            .map_err(|error| AppError::storage(format!("cache write failed: {error}")))
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AppError::storage(format!("cache delete failed: {error}"))),
        }
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => {
                return Err(AppError::storage(format!("cache listing failed: {error}")))
            }
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|error| AppError::storage(format!("cache listing failed: {error}")))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Ok(decoded) = urlencoding::decode(name) {
                keys.push(decoded.into_owned());
            }
        }
        Ok(keys)
    }
}
