use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Structurally malformed sample, rejected before signing.
    #[error("invalid sample: {field} is missing or malformed")]
    InvalidSample {
        /// Field that failed validation.
        field: &'static str,
    },
    /// Signature mismatch at verification; the record must be rejected.
    #[error("record signature does not match declared fields")]
    Unauthenticated,
    /// Serialization of the signing shape failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// The supplied signing secret was unusable as key material.
    #[error("invalid signing secret: {0}")]
    Secret(String),
    /// Canonicalization error.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] tally_canonical::CanonicalizationError),
    /// Signature construction failed.
    #[error("signature construction failed: {0}")]
    Signature(#[from] tally_canonical::ValidationError),
}
