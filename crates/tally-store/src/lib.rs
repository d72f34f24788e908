//! Record store boundary and resource query engine for tally.
//!
//! This crate provides:
//! - `RecordWriter` and `RecordReader` traits for append-only record storage
//! - An in-memory reference backend for tests and embedding
//! - Typed record parsing from the stored JSON shape
//! - The resource filter API (origin, user, project, composition)
//! - `list_resources`, the aggregate-then-filter query entry point
//!
//! Durable backends live behind the writer/reader traits and are out of
//! scope here; the contract they must honor is append-only insertion
//! and scans in insertion order, so the aggregator's last-in-wins
//! tie-break stays deterministic.
//!
#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Resource filtering API.
pub mod filter;
/// In-memory reference backend.
pub mod memory;
/// Storage boundary traits.
pub mod traits;
/// Typed record parsing.
pub mod typed;
/// Resource listing query engine.
pub mod view;

pub use error::StoreError;
pub use filter::{AndFilter, OriginFilter, ProjectFilter, ResourceFilter, UserFilter};
pub use memory::{MemoryReader, MemoryStore, MemoryWriter};
pub use traits::{RecordJson, RecordReader, RecordWriter};
pub use typed::{encode_record, parse_record, ParseError};
pub use view::{list_resources, ResourceListing};
