//! Storage boundary traits.

use crate::error::StoreError;

/// The stored shape of one signed record: a flat JSON object with the
/// sample fields, `origin`, and `signature`.
pub type RecordJson = serde_json::Value;

/// Writer half of the record store boundary.
///
/// Implementations must be append-only: a previously accepted record is
/// never mutated, dropped, or reordered relative to other appends from
/// the same caller.
pub trait RecordWriter {
    /// Durably persists one verified record.
    fn append(&mut self, record: &RecordJson) -> Result<(), StoreError>;
}

/// Reader half of the record store boundary.
///
/// Scans must yield records in insertion order so the aggregator's
/// equal-timestamp tie-break (last in wins) is deterministic.
pub trait RecordReader {
    /// Returns the next record, or `None` at the end of the scan.
    fn read_next(&mut self) -> Result<Option<RecordJson>, StoreError>;
}
