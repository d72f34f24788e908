use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

/// Scalar metadata value: the only shape that survives projection into
/// a displayed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// JSON null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer or floating-point number.
    Number(Number),
    /// String.
    String(String),
}

/// Nested metadata value: a mapping or a sequence. Preserved on the
/// stored record but dropped when the resource view is projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedValue {
    /// Nested mapping.
    Map(BTreeMap<String, MetadataValue>),
    /// Ordered sequence.
    List(Vec<MetadataValue>),
}

/// One metadata value as carried by a sample.
///
/// The scalar/nested split is deliberate: the projection rule for
/// displayed resources is a match on the variant, not a runtime type
/// inspection, so "what counts as scalar" is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Scalar value (string, number, boolean, null).
    Scalar(ScalarValue),
    /// Nested mapping or sequence.
    Nested(NestedValue),
}

impl MetadataValue {
    /// Returns true if the value is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, MetadataValue::Scalar(_))
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Scalar(ScalarValue::String(value.to_string()))
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Scalar(ScalarValue::Bool(value))
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Scalar(ScalarValue::Number(Number::from(value)))
    }
}

/// Projects a metadata mapping down to its scalar-valued entries.
///
/// Entries whose value is a nested mapping or sequence are dropped
/// silently; the underlying record retains them. Key order is
/// irrelevant to the result.
pub fn project_scalars(
    metadata: &BTreeMap<String, MetadataValue>,
) -> BTreeMap<String, ScalarValue> {
    metadata
        .iter()
        .filter_map(|(key, value)| match value {
            MetadataValue::Scalar(scalar) => Some((key.clone(), scalar.clone())),
            MetadataValue::Nested(_) => None,
        })
        .collect()
}
