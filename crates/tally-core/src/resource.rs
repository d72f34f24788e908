use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tally_canonical::{project_scalars, ScalarValue};

use crate::record::SignedRecord;

/// The aggregated, current-state view of all samples sharing a
/// resource identifier.
///
/// Attributes come from the representative (most recent) record;
/// `origins` accumulates across every contributing record. A resource
/// exists iff at least one verified sample with its `resource_id` was
/// recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The grouping key.
    pub resource_id: String,
    /// Owner user from the representative record; may be empty.
    pub user_id: String,
    /// Owner project from the representative record; may be empty.
    pub project_id: String,
    /// Representative metadata restricted to scalar-valued entries.
    pub metadata: BTreeMap<String, ScalarValue>,
    /// Distinct origin tags across all contributing records.
    pub origins: BTreeSet<String>,
}

impl Resource {
    /// Derives the displayed resource from its representative record
    /// and the accumulated origin set.
    ///
    /// Nested metadata entries are dropped here, at projection time;
    /// the underlying record retains them.
    pub fn from_representative(representative: &SignedRecord, origins: BTreeSet<String>) -> Self {
        Resource {
            resource_id: representative.sample.resource_id.clone(),
            user_id: representative.sample.user_id.clone(),
            project_id: representative.sample.project_id.clone(),
            metadata: project_scalars(&representative.sample.metadata),
            origins,
        }
    }
}
