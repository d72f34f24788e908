//! Canonical data model primitives for tally metering records.
//!
//! Every field that participates in record signing lives in this crate:
//! the deterministic JSON canonicalizer, the timestamp newtype with a
//! fixed-precision serialization, the metadata value model, and the
//! signature primitive carried on signed records.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic signing bytes.
pub mod canonicalizer;
/// Metadata value model (scalar vs. nested, enforced at the type level).
pub mod metadata;
/// Signature primitives carried on signed records.
pub mod signature;
/// Timestamp newtype with stable RFC 3339 encoding.
pub mod timestamp;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{canonical_bytes, CanonicalizationError};
pub use metadata::{project_scalars, MetadataValue, NestedValue, ScalarValue};
pub use signature::{RecordSignature, SignatureAlg};
pub use timestamp::Timestamp;
pub use validation::ValidationError;
