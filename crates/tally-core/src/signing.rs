use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use tally_canonical::{canonical_bytes, RecordSignature, SignatureAlg};

use crate::errors::CoreError;
use crate::record::SignedRecord;
use crate::sample::Sample;

/// Domain separator for record signing: `b"tally:record:v1\0"`.
const RECORD_DOMAIN_SEPARATOR: &[u8] = b"tally:record:v1\0";

type HmacSha256 = Hmac<Sha256>;

/// Computes and checks integrity signatures over records.
///
/// Implementations are pure functions of `(record, secret)` with no
/// hidden state; the secret is caller-supplied per call and never
/// retained.
pub trait RecordSigner {
    /// Computes the signature for a sample and its declared origin.
    fn sign(
        &self,
        sample: &Sample,
        origin: &str,
        secret: &[u8],
    ) -> Result<RecordSignature, CoreError>;

    /// Recomputes the signature from the record's declared fields and
    /// compares it to the stored one. A mismatch fails with
    /// [`CoreError::Unauthenticated`]; the record must be rejected
    /// before it reaches the store.
    fn verify(&self, record: &SignedRecord, secret: &[u8]) -> Result<(), CoreError>;

    /// Validates and signs a sample, producing the record to persist.
    ///
    /// This is the ingestion entry point: validation failures surface
    /// as [`CoreError::InvalidSample`] before any signing work happens.
    fn seal(
        &self,
        sample: Sample,
        origin: impl Into<String>,
        secret: &[u8],
    ) -> Result<SignedRecord, CoreError>
    where
        Self: Sized,
    {
        sample.validate()?;
        let origin = origin.into();
        let signature = self.sign(&sample, &origin, secret)?;
        Ok(SignedRecord {
            sample,
            origin,
            signature,
        })
    }
}

/// HMAC-SHA-256 signer over canonical record bytes.
///
/// Formula: `HMAC-SHA-256(secret, domain_separator || canonical_bytes(sample fields + origin))`,
/// encoded base64url without padding. Canonicalization sorts map keys,
/// so the signature is independent of field ordering in the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256Signer;

impl HmacSha256Signer {
    /// Creates a new signer.
    pub fn new() -> Self {
        Self
    }

    fn keyed_digest(&self, value: &Value, secret: &[u8]) -> Result<HmacSha256, CoreError> {
        let bytes = canonical_bytes(value)?;
        let mut mac = HmacSha256::new_from_slice(secret)
            .map_err(|err| CoreError::Secret(err.to_string()))?;
        mac.update(RECORD_DOMAIN_SEPARATOR);
        mac.update(&bytes);
        Ok(mac)
    }
}

impl RecordSigner for HmacSha256Signer {
    fn sign(
        &self,
        sample: &Sample,
        origin: &str,
        secret: &[u8],
    ) -> Result<RecordSignature, CoreError> {
        let value = signing_value(sample, origin)?;
        let mac = self.keyed_digest(&value, secret)?;
        let tag = mac.finalize().into_bytes();

        use base64::Engine;
        let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(tag);
        Ok(RecordSignature::new(SignatureAlg::HmacSha256, b64)?)
    }

    fn verify(&self, record: &SignedRecord, secret: &[u8]) -> Result<(), CoreError> {
        let value = signing_value(&record.sample, &record.origin)?;
        let mac = self.keyed_digest(&value, secret)?;

        use base64::Engine;
        let declared = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(&record.signature.b64)
            .map_err(|_| CoreError::Unauthenticated)?;

        // Constant-time comparison via the Mac contract.
        mac.verify_slice(&declared)
            .map_err(|_| CoreError::Unauthenticated)
    }
}

/// Builds the JSON shape the signature covers: the flattened sample
/// fields plus `origin`, minus `signature` itself.
fn signing_value(sample: &Sample, origin: &str) -> Result<Value, CoreError> {
    let mut value =
        serde_json::to_value(sample).map_err(|err| CoreError::Serialization(err.to_string()))?;
    match &mut value {
        Value::Object(map) => {
            map.insert("origin".to_string(), Value::String(origin.to_string()));
        }
        _ => {
            return Err(CoreError::Serialization(
                "sample did not serialize to an object".to_string(),
            ));
        }
    }
    Ok(value)
}
