//! Team repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::teams_sea::{self as teams_adapter, TeamFilter};
use crate::entities::teams;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn list_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &TeamFilter,
) -> Result<Vec<Team>, DomainError> {
    let models = teams_adapter::select_teams(conn, filter).await?;
    Ok(models.into_iter().map(Team::from).collect())
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Team, DomainError> {
    let model = teams_adapter::insert_team(conn, name).await?;
    Ok(Team::from(model))
}
