//! In-memory reference backend.
//!
//! Exists for tests and embedding; durable backends implement the same
//! traits elsewhere. Appends take the write lock briefly, scans take
//! the read lock per step, so queries never hold inserts back for the
//! duration of a listing.

use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::traits::{RecordJson, RecordReader, RecordWriter};

/// Shared append-only record vector.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<RecordJson>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer handle over the shared record vector.
    pub fn writer(&self) -> MemoryWriter {
        MemoryWriter {
            records: Arc::clone(&self.records),
        }
    }

    /// Creates a reader handle positioned at the start of the store.
    pub fn reader(&self) -> MemoryReader {
        MemoryReader {
            records: Arc::clone(&self.records),
            cursor: 0,
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Returns true if no records have been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Writer over the in-memory store.
#[derive(Debug)]
pub struct MemoryWriter {
    records: Arc<RwLock<Vec<RecordJson>>>,
}

impl RecordWriter for MemoryWriter {
    fn append(&mut self, record: &RecordJson) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        records.push(record.clone());
        Ok(())
    }
}

/// Reader over the in-memory store, yielding records in insertion
/// order. Records appended after the reader was created are still
/// visible to it; the cursor only moves forward.
#[derive(Debug)]
pub struct MemoryReader {
    records: Arc<RwLock<Vec<RecordJson>>>,
    cursor: usize,
}

impl RecordReader for MemoryReader {
    fn read_next(&mut self) -> Result<Option<RecordJson>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        let next = records.get(self.cursor).cloned();
        if next.is_some() {
            self.cursor += 1;
        }
        Ok(next)
    }
}
