//! League repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::leagues_sea::{self as leagues_adapter, LeagueFilter};
use crate::entities::leagues;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<leagues::Model> for League {
    fn from(model: leagues::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn list_leagues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &LeagueFilter,
) -> Result<Vec<League>, DomainError> {
    let models = leagues_adapter::select_leagues(conn, filter).await?;
    Ok(models.into_iter().map(League::from).collect())
}

/// The league, if it exists and is linked to `organization_id`.
pub async fn find_in_organization<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: Uuid,
    organization_id: &str,
) -> Result<Option<League>, DomainError> {
    let filter = LeagueFilter {
        ids: vec![league_id],
        organization_id: Some(organization_id.to_string()),
    };
    let models = leagues_adapter::select_leagues(conn, &filter).await?;
    Ok(models.into_iter().next().map(League::from))
}

pub async fn create_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    team_ids: &[Uuid],
) -> Result<League, DomainError> {
    let model = leagues_adapter::insert_league(conn, name).await?;
    for team_id in team_ids {
        leagues_adapter::insert_league_team(conn, model.id, *team_id).await?;
    }
    Ok(League::from(model))
}

/// Replace every league link of an organization.
pub async fn replace_organization_leagues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    organization_id: &str,
    league_ids: &[Uuid],
) -> Result<(), DomainError> {
    leagues_adapter::delete_organization_leagues(conn, organization_id).await?;
    for league_id in league_ids {
        leagues_adapter::insert_organization_league(conn, organization_id, *league_id).await?;
    }
    Ok(())
}
