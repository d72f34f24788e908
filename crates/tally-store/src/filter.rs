//! Resource filtering API for listing queries.
//!
//! Filters are evaluated against the fully aggregated resource index,
//! never against raw records: origin matching must see the union of a
//! resource's historical origins, which only exists after aggregation.

use tally_core::Resource;

/// Trait for narrowing an aggregated resource listing.
pub trait ResourceFilter {
    /// Returns true if the resource matches the filter criteria.
    fn matches(&self, resource: &Resource) -> bool;
}

/// Matches resources whose origin set contains the given tag.
///
/// One older record from a source keeps the resource reachable through
/// that source, even when the latest record came from elsewhere.
#[derive(Debug, Clone)]
pub struct OriginFilter {
    /// Origin tag to match.
    pub origin: String,
}

impl ResourceFilter for OriginFilter {
    fn matches(&self, resource: &Resource) -> bool {
        resource.origins.contains(&self.origin)
    }
}

/// Matches resources whose representative record's user equals the
/// given identity.
#[derive(Debug, Clone)]
pub struct UserFilter {
    /// User identity to match.
    pub user_id: String,
}

impl ResourceFilter for UserFilter {
    fn matches(&self, resource: &Resource) -> bool {
        resource.user_id == self.user_id
    }
}

/// Matches resources whose representative record's project equals the
/// given identity.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    /// Project identity to match.
    pub project_id: String,
}

impl ResourceFilter for ProjectFilter {
    fn matches(&self, resource: &Resource) -> bool {
        resource.project_id == self.project_id
    }
}

/// Composite filter: all filters must match (AND).
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn ResourceFilter>>,
}

impl ResourceFilter for AndFilter {
    fn matches(&self, resource: &Resource) -> bool {
        self.filters.iter().all(|f| f.matches(resource))
    }
}
