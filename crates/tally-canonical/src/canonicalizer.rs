use canonical_json::to_string;
use serde_json::Value;
use std::fmt;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// Provided JSON could not be canonicalized.
    #[error("invalid JSON structure: {0}")]
    InvalidStructure(String),
    /// Non-finite number (NaN/Infinity) detected.
    #[error("non-finite number detected at {0}")]
    NonFiniteNumber(String),
    /// Generic failure.
    #[error("other error: {0}")]
    Other(String),
}

/// Helper for building JSON paths during validation.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Produces RFC 8785 canonical bytes for the input value.
///
/// The value is validated first; a non-finite number anywhere in the
/// tree fails with the JSON path of the offending entry. Map keys are
/// emitted in sorted order, so the bytes are independent of insertion
/// order in the source structures.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
    validate(value, Path::root())?;
    let canonical = to_string(value).map_err(|err| CanonicalizationError::Other(err.to_string()))?;
    Ok(canonical.into_bytes())
}

fn validate(value: &Value, path: Path) -> Result<(), CanonicalizationError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                validate(child, path.push_field(key))?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                validate(item, path.push_index(idx))?;
            }
            Ok(())
        }
        Value::Number(num) => {
            if num.is_f64() {
                let f = num.as_f64().unwrap();
                if !f.is_finite() {
                    return Err(CanonicalizationError::NonFiniteNumber(format!("{}", path)));
                }
            }
            Ok(())
        }
        Value::String(s) => {
            if s.chars().any(|c| c as u32 > 0x10FFFF) {
                return Err(CanonicalizationError::InvalidStructure(format!(
                    "{}: invalid UTF-8",
                    path
                )));
            }
            Ok(())
        }
        Value::Bool(_) | Value::Null => Ok(()),
    }
}
