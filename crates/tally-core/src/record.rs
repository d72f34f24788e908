use serde::{Deserialize, Serialize};
use tally_canonical::RecordSignature;

use crate::sample::Sample;

/// A sample plus its declared origin and integrity signature.
///
/// This is the shape that crosses the store boundary. The sample fields
/// are flattened so the stored JSON object is flat: sample fields,
/// `origin`, `signature`. The signature covers everything except
/// itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedRecord {
    /// The measurement this record carries.
    #[serde(flatten)]
    pub sample: Sample,
    /// Tag identifying the producing component/tenant. Supplied at
    /// signing time, not part of the sample body.
    pub origin: String,
    /// Integrity token over the sample fields and origin.
    pub signature: RecordSignature,
}
