// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Durable key-value cache for the content snapshot
//!
//! The content store keeps the whole serialized snapshot under a single
//! key and overwrites it wholesale on every mutation. The file-backed
//! implementation uses atomic writes (temp file, then rename) so a crash
//! mid-write leaves either the old or the new complete snapshot.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Durable key-value store capability.
///
/// Both operations are synchronous from the store's perspective; the
/// backing primitive is expected to be atomic per key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// File-backed store: one file per key under a cache directory.
pub struct FileStore {
    cache_dir: PathBuf,
}

impl FileStore {
    /// Create a file store at the given storage path.
    ///
    /// Creates a `cache/` subdirectory if it doesn't exist.
    pub fn new(storage_path: &Path) -> Result<Self, CacheError> {
        let cache_dir = storage_path.join("cache");
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        atomic_write(&self.key_path(key), value.as_bytes())
    }
}

/// In-memory store, primarily for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Atomic file write (write to temp, then rename)
///
/// This ensures that the file is never in a partial state - either the
/// old content remains or the new content is fully written.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), CacheError> {
    let temp_path = path.with_extension("tmp");

    // Write to temp file
    fs::write(&temp_path, data)?;

    // Atomic rename
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Errors that can occur with the snapshot cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
