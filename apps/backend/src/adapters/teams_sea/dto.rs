//! DTOs for teams_sea adapter.

use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    /// Empty means no restriction.
    pub ids: Vec<Uuid>,
    /// Only members of this league
    pub league_id: Option<Uuid>,
    /// Only members of leagues linked to this organization
    pub organization_id: Option<String>,
}
