//! Durable sinks for the user-created offer blob.
//!
//! The store persists one JSON blob (the current user-created subset) and
//! reads it back on rehydration. A sink is a put/get slot for that blob;
//! swapping the implementation never changes the store contract.

use crate::error::{Result, StoreError};
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Overwrite-style blob storage.
///
/// `put` replaces the whole blob; `get` returns the last written blob, or
/// `None` when nothing has been persisted yet.
pub trait DurableSink: Send + Sync {
    fn put(&self, blob: &[u8]) -> Result<()>;
    fn get(&self) -> Result<Option<Vec<u8>>>;
}

/// Sink backed by a single file on disk.
///
/// Holds an exclusive lock on a sibling `.lock` file for its lifetime, so
/// two processes cannot write the same blob. Writes go to a temp file and
/// are renamed into place.
pub struct FileSink {
    path: PathBuf,

    /// Lock file for exclusive access.
    _lock_file: File,

    /// Serializes writers within this process.
    write_lock: Mutex<()>,
}

impl FileSink {
    /// Open a sink at the given path, creating parent directories as
    /// needed. Fails with [`StoreError::Locked`] if another sink holds the
    /// lock.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let lock_file = Self::acquire_lock(&path)?;

        Ok(Self {
            path,
            _lock_file: lock_file,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn acquire_lock(path: &Path) -> Result<File> {
        let mut lock_path = path.as_os_str().to_owned();
        lock_path.push(".lock");
        let lock_file = File::create(lock_path)?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| StoreError::Locked)?;

        Ok(lock_file)
    }
}

impl DurableSink for FileSink {
    fn put(&self, blob: &[u8]) -> Result<()> {
        let _lock = self.write_lock.lock();

        // Write-then-rename so a crash mid-write never leaves a torn blob.
        let tmp_path = self.path.with_extension("tmp");
        let mut file = File::create(&tmp_path)?;
        file.write_all(blob)?;
        file.sync_all()?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn get(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process sink holding the blob in memory.
///
/// Used in tests and wherever durability across restarts is not wanted.
#[derive(Default)]
pub struct MemorySink {
    blob: Mutex<Option<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableSink for MemorySink {
    fn put(&self, blob: &[u8]) -> Result<()> {
        *self.blob.lock() = Some(blob.to_vec());
        Ok(())
    }

    fn get(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.blob.lock().clone())
    }
}
