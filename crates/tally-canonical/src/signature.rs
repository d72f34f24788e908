use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Supported signature algorithms for record integrity tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureAlg {
    /// HMAC-SHA-256 keyed digest (the current tally default).
    #[serde(rename = "hmac-sha-256")]
    HmacSha256,
}

/// Algorithm + signature bytes, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSignature {
    /// Signature algorithm (currently always `hmac-sha-256`).
    pub alg: SignatureAlg,
    /// Base64URL (no padding) signature bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

impl RecordSignature {
    /// Constructs a validated signature.
    pub fn new(alg: SignatureAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let re = Regex::new(r"^[A-Za-z0-9_-]{43,44}$").expect("invalid regex");
        if !re.is_match(&b64) {
            return Err(ValidationError::PatternMismatch {
                field: "signature",
                value: b64,
            });
        }
        Ok(RecordSignature { alg, b64 })
    }
}
