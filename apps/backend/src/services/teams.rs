//! Team service.

use sea_orm::DatabaseTransaction;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::adapters::teams_sea::TeamFilter;
use crate::errors::domain::DomainError;
use crate::repos::teams::{self, Team};

#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    pub name: String,
}

pub struct TeamService;

impl TeamService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_team(
        &self,
        txn: &DatabaseTransaction,
        new: NewTeam,
    ) -> Result<Team, DomainError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation_other("team name cannot be empty"));
        }
        let team = teams::create_team(txn, name).await?;
        info!(team_id = %team.id, "team created");
        Ok(team)
    }

    /// Teams reachable through the organization's leagues, optionally
    /// narrowed to one league.
    pub async fn list_teams(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        league_id: Option<Uuid>,
    ) -> Result<Vec<Team>, DomainError> {
        teams::list_teams(
            txn,
            &TeamFilter {
                ids: Vec::new(),
                league_id,
                organization_id: Some(organization_id.to_string()),
            },
        )
        .await
    }
}

impl Default for TeamService {
    fn default() -> Self {
        Self::new()
    }
}
