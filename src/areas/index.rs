//! Index (staging area)
//!
//! The index records which content should go into the next commit. It is an
//! append-only, ordered list of `(path, digest)` entries, persisted as text,
//! that is read in full and truncated by commit.
//!
//! ## Life cycle
//!
//! - `rehydrate` loads the entries already on disk
//! - `add` queues a new entry behind them
//! - `write_updates` appends the queued entries to the file
//! - `clear` truncates the file after a commit

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Packable;
use anyhow::Context;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
    /// Every entry, in staging order
    entries: Vec<IndexEntry>,
    /// Number of leading entries already persisted
    persisted: usize,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            persisted: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing file is an empty index. Queued entries that were never
    /// written are dropped.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.persisted = 0;

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("failed to open index file at {:?}", self.path()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("failed to read index file at {:?}", self.path()))?;

        self.entries = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(IndexEntry::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        self.persisted = self.entries.len();

        tracing::trace!(entries = self.entries.len(), "loaded index");

        Ok(())
    }

    /// Queue an entry behind the existing ones
    ///
    /// The same path may be staged any number of times; nothing is replaced.
    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
    }

    /// Append the queued entries to the index file
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if self.persisted == self.entries.len() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path())
            .with_context(|| format!("failed to open index file at {:?}", self.path()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        for entry in &self.entries[self.persisted..] {
            lock.deref_mut().write_all(&entry.serialize()?)?;
        }

        tracing::debug!(
            appended = self.entries.len() - self.persisted,
            total = self.entries.len(),
            "updated index"
        );
        self.persisted = self.entries.len();

        Ok(())
    }

    /// Drop every entry, on disk and in memory
    pub fn clear(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("failed to truncate index file at {:?}", self.path()))?;
        let _lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        self.entries.clear();
        self.persisted = 0;

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }
}
