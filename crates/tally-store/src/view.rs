//! Resource listing query engine.

use tracing::warn;

use crate::error::StoreError;
use crate::filter::ResourceFilter;
use crate::traits::RecordReader;
use crate::typed::parse_record;
use tally_core::{aggregate_resources, Resource};

/// Result of a resource listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceListing {
    /// Matching resources, sorted by `resource_id`. No two entries
    /// share a `resource_id`.
    pub resources: Vec<Resource>,
    /// Stored records skipped because they failed to parse. Non-fatal
    /// diagnostic; a malformed record never aborts the listing.
    pub skipped: usize,
}

/// Lists resources known to the store, optionally narrowed by a filter.
///
/// Performs a full scan of the reader, folds the records into the
/// per-resource index, and only then applies the filter — aggregation
/// always precedes filtering. An empty matching set yields an empty
/// listing, never an error. Ordering is by `resource_id`, so repeated
/// calls over the same record set return identical sequences.
pub fn list_resources<R: RecordReader>(
    reader: &mut R,
    filter: Option<&dyn ResourceFilter>,
) -> Result<ResourceListing, StoreError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    loop {
        match reader.read_next()? {
            None => break,
            Some(json) => match parse_record(&json) {
                Ok(record) => records.push(record),
                Err(err) => {
                    skipped += 1;
                    warn!(error = %err, "skipping unparseable stored record");
                }
            },
        }
    }

    let index = aggregate_resources(records);
    let resources = index
        .into_values()
        .filter(|resource| filter.map_or(true, |f| f.matches(resource)))
        .collect();

    Ok(ResourceListing { resources, skipped })
}
