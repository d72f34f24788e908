//! Typed record parsing from the stored JSON shape.

use crate::error::StoreError;
use crate::traits::RecordJson;
use tally_core::SignedRecord;
use thiserror::Error;

/// Error that can occur when parsing a stored record.
#[derive(Error, Debug)]
pub enum ParseError {
    /// JSON deserialization error.
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Parses a stored JSON record into its typed form.
///
/// Parsing does not verify the signature; callers that accept records
/// from untrusted producers verify before persisting, so everything in
/// the store is already authenticated.
pub fn parse_record(json: &RecordJson) -> Result<SignedRecord, ParseError> {
    let record: SignedRecord = serde_json::from_value(json.clone())?;
    Ok(record)
}

/// Encodes a typed record into the stored JSON shape.
pub fn encode_record(record: &SignedRecord) -> Result<RecordJson, StoreError> {
    serde_json::to_value(record).map_err(|err| StoreError::Other(err.to_string()))
}
