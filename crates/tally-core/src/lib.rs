//! Sample model, record signing, and resource aggregation for tally.
//!
//! This crate provides:
//! - The `Sample` measurement model and its ingestion validation
//! - HMAC record signing and verification over canonical bytes
//! - The aggregator that folds verified records into per-resource state
//! - The derived `Resource` view handed to the query layer
//!
//! Core invariants:
//! - Records are immutable, append-only evidence of usage
//! - Signatures are pure functions of `(sample, origin, secret)`
//! - A resource's attributes come from its single most recent record;
//!   its origin set accumulates across every record
//!
#![deny(missing_docs)]

/// Resource aggregation from verified record streams.
pub mod aggregate;
/// Error types for core operations.
pub mod errors;
/// Signed record type pairing a sample with its origin and signature.
pub mod record;
/// Derived per-resource view types.
pub mod resource;
/// The sample measurement model.
pub mod sample;
/// Record signing and verification.
pub mod signing;

pub use aggregate::aggregate_resources;
pub use errors::CoreError;
pub use record::SignedRecord;
pub use resource::Resource;
pub use sample::{Sample, SampleKind};
pub use signing::{HmacSha256Signer, RecordSigner};
