use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::validation::ValidationError;

/// UTC timestamp with a stable, microsecond-precision RFC 3339 encoding.
///
/// The fixed precision matters: the same instant must always serialize
/// to the same bytes, because timestamps participate in record signing.
/// Ordering is total, so timestamps can drive recency comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wraps a UTC datetime.
    pub fn new(inner: DateTime<Utc>) -> Self {
        Self(inner)
    }

    /// Parses a validated timestamp from an RFC 3339 string.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let s = value.as_ref();
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|_| ValidationError::PatternMismatch {
                field: "timestamp",
                value: s.to_string(),
            })
    }

    /// Returns the wrapped UTC datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(inner: DateTime<Utc>) -> Self {
        Self(inner)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(D::Error::custom)
    }
}
