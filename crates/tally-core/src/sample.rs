use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tally_canonical::{MetadataValue, Timestamp};

use crate::errors::CoreError;

/// How values of the same name/resource combine downstream.
///
/// Preserved and forwarded intact; the listing path does not consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    /// Monotonically increasing total.
    Cumulative,
    /// Point-in-time reading.
    Gauge,
    /// Change since the previous sample.
    Delta,
}

/// One observed measurement of a named quantity for a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Identifier of the measured quantity (e.g., "instance").
    pub name: String,
    /// Combination semantics for this measurement.
    pub kind: SampleKind,
    /// Numeric value of the measurement.
    pub volume: f64,
    /// Owning user identity; may be empty.
    pub user_id: String,
    /// Owning project identity; may be empty.
    pub project_id: String,
    /// Stable identifier of the measured resource; aggregation key.
    pub resource_id: String,
    /// When the sample was observed.
    pub timestamp: Timestamp,
    /// Free-form metadata carried with the measurement.
    #[serde(default)]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl Sample {
    /// Validates the sample at ingestion, before signing.
    ///
    /// `user_id` and `project_id` may be empty; `name` and
    /// `resource_id` may not, and `volume` must be finite so the
    /// canonical signing bytes are representable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::InvalidSample { field: "name" });
        }
        if self.resource_id.is_empty() {
            return Err(CoreError::InvalidSample {
                field: "resource_id",
            });
        }
        if !self.volume.is_finite() {
            return Err(CoreError::InvalidSample { field: "volume" });
        }
        Ok(())
    }
}
