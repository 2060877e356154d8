//! DTOs for leagues_sea adapter.

use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct LeagueFilter {
    /// Empty means no restriction.
    pub ids: Vec<Uuid>,
    /// Only leagues linked to this organization
    pub organization_id: Option<String>,
}
