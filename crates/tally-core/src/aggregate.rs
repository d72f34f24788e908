use std::collections::{BTreeMap, BTreeSet};

use crate::record::SignedRecord;
use crate::resource::Resource;

/// Running state for one resource while folding the record stream.
#[derive(Debug)]
struct ResourceAccumulator {
    representative: SignedRecord,
    origins: BTreeSet<String>,
}

impl ResourceAccumulator {
    fn new(record: SignedRecord) -> Self {
        let mut origins = BTreeSet::new();
        origins.insert(record.origin.clone());
        Self {
            representative: record,
            origins,
        }
    }

    fn absorb(&mut self, record: SignedRecord) {
        self.origins.insert(record.origin.clone());
        // `>=` makes equal timestamps resolve to the last-supplied
        // record, keeping the fold deterministic for a fixed input
        // order.
        if record.sample.timestamp >= self.representative.sample.timestamp {
            self.representative = record;
        }
    }

    fn finish(self) -> Resource {
        Resource::from_representative(&self.representative, self.origins)
    }
}

/// Folds an ordered stream of verified records into a mapping from
/// resource identity to current resource state.
///
/// Within each `resource_id` group the record with the maximum
/// timestamp becomes the representative (ties: last supplied wins) and
/// provides the resource's attributes. `origins` is the union of
/// origin tags across the whole group regardless of recency, so a
/// resource stays reachable through source filtering even when its
/// latest record came from elsewhere. The two derivations are kept
/// separate on purpose: provenance is cumulative, current state is
/// not.
pub fn aggregate_resources<I>(records: I) -> BTreeMap<String, Resource>
where
    I: IntoIterator<Item = SignedRecord>,
{
    let mut groups: BTreeMap<String, ResourceAccumulator> = BTreeMap::new();

    for record in records {
        match groups.get_mut(&record.sample.resource_id) {
            Some(accumulator) => accumulator.absorb(record),
            None => {
                groups.insert(
                    record.sample.resource_id.clone(),
                    ResourceAccumulator::new(record),
                );
            }
        }
    }

    groups
        .into_iter()
        .map(|(resource_id, accumulator)| (resource_id, accumulator.finish()))
        .collect()
}
