//! DTOs for match_scouts_sea adapter.

use uuid::Uuid;

use crate::domain::coverage::Coverage;

#[derive(Debug, Clone)]
pub struct AssignmentCreate {
    pub match_id: Uuid,
    pub account_id: String,
    pub coverage: Coverage,
}

/// Both fields optional; the organization is matched through the match row.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFilter {
    pub match_id: Option<Uuid>,
    pub match_organization_id: Option<String>,
}

impl AssignmentFilter {
    pub fn for_match(match_id: Uuid) -> Self {
        Self {
            match_id: Some(match_id),
            match_organization_id: None,
        }
    }

    pub fn in_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.match_organization_id = Some(organization_id.into());
        self
    }
}
