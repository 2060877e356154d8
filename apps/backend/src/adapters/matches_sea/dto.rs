//! DTOs for matches_sea adapter.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::lifecycle::{MatchStatus, Score};

#[derive(Debug, Clone)]
pub struct MatchCreate {
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub organization_id: String,
    pub created_by: String,
    pub starts_at: OffsetDateTime,
}

/// Selection criteria. `status` is always explicit.
#[derive(Debug, Clone)]
pub struct MatchFilter {
    pub id: Option<Uuid>,
    pub organization_id: Option<String>,
    pub status: MatchStatus,
}

impl MatchFilter {
    pub fn new(status: MatchStatus) -> Self {
        Self {
            id: None,
            organization_id: None,
            status,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn in_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchFinish {
    pub id: Uuid,
    pub score: Score,
    pub finished_at: OffsetDateTime,
}
