//! League service: creation with team membership, organization links.

use sea_orm::DatabaseTransaction;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::adapters::leagues_sea::LeagueFilter;
use crate::adapters::teams_sea::TeamFilter;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::leagues::League;
use crate::repos::{leagues, organizations, teams};

#[derive(Debug, Clone, Deserialize)]
pub struct NewLeague {
    pub name: String,
    #[serde(default)]
    pub team_ids: Vec<Uuid>,
}

pub struct LeagueService;

impl LeagueService {
    pub fn new() -> Self {
        Self
    }

    /// Every listed team must exist.
    pub async fn create_league(
        &self,
        txn: &DatabaseTransaction,
        new: NewLeague,
    ) -> Result<League, DomainError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation_other("league name cannot be empty"));
        }

        let found = if new.team_ids.is_empty() {
            Vec::new()
        } else {
            teams::list_teams(
                txn,
                &TeamFilter {
                    ids: new.team_ids.clone(),
                    ..TeamFilter::default()
                },
            )
            .await?
        };
        if found.len() != new.team_ids.len() {
            return Err(DomainError::validation_other(format!(
                "expected {} teams, found {}",
                new.team_ids.len(),
                found.len()
            )));
        }

        let team_ids: Vec<Uuid> = found.iter().map(|t| t.id).collect();
        let league = leagues::create_league(txn, name, &team_ids).await?;

        info!(league_id = %league.id, teams = team_ids.len(), "league created");
        Ok(league)
    }

    /// Replace the set of leagues the organization schedules in.
    pub async fn update_organization_leagues(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        league_ids: Vec<Uuid>,
    ) -> Result<Vec<League>, DomainError> {
        organizations::find_by_id(txn, organization_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Organization, "organization"))?;

        let mut league_ids = league_ids;
        league_ids.sort_unstable();
        league_ids.dedup();

        if !league_ids.is_empty() {
            let found = leagues::list_leagues(
                txn,
                &LeagueFilter {
                    ids: league_ids.clone(),
                    organization_id: None,
                },
            )
            .await?;
            if found.len() != league_ids.len() {
                return Err(DomainError::validation_other(format!(
                    "expected {} leagues, found {}",
                    league_ids.len(),
                    found.len()
                )));
            }
        }

        leagues::replace_organization_leagues(txn, organization_id, &league_ids).await?;
        info!(organization_id, leagues = league_ids.len(), "organization leagues replaced");

        self.list_leagues(txn, organization_id).await
    }

    pub async fn list_leagues(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
    ) -> Result<Vec<League>, DomainError> {
        leagues::list_leagues(
            txn,
            &LeagueFilter {
                ids: Vec::new(),
                organization_id: Some(organization_id.to_string()),
            },
        )
        .await
    }
}

impl Default for LeagueService {
    fn default() -> Self {
        Self::new()
    }
}
