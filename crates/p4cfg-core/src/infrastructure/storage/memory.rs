//! In-memory document storage for tests.
//!
//! Lets tests observe exactly how many writes the store performed and inject
//! read or write failures without touching the file system.

use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::application::store::DocumentStore;

/// A [`DocumentStore`] backed by a map of path to document text.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<PathBuf, String>>,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document without counting it as a write.
    pub fn insert(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), text.into());
    }

    /// Returns the stored document at `path`, if any.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path.as_ref())
            .cloned()
    }

    /// Number of successful writes since construction.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Makes every following read fail with `PermissionDenied`.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every following write fail with `PermissionDenied`.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl DocumentStore for MemoryStorage {
    fn read(&self, path: &Path) -> std::io::Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::from(ErrorKind::PermissionDenied));
        }
        Ok(self.contents(path))
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::from(ErrorKind::PermissionDenied));
        }
        self.insert(path, contents);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
