//! Match repository functions for the lifecycle services.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::matches_sea::{self as matches_adapter, MatchCreate, MatchFilter, MatchFinish};
use crate::domain::lifecycle::Score;
use crate::entities::matches;
use crate::errors::domain::DomainError;

/// Match domain model. `score` and `finished_at` are either both set or
/// both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: Uuid,
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub created_by: String,
    pub organization_id: String,
    pub score: Option<Score>,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub finished_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Match {
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

impl From<matches::Model> for Match {
    fn from(model: matches::Model) -> Self {
        let score = match (model.home_score, model.away_score) {
            (Some(home), Some(away)) => Some(Score { home, away }),
            _ => None,
        };
        Self {
            id: model.id,
            league_id: model.league_id,
            home_team_id: model.home_team_id,
            away_team_id: model.away_team_id,
            created_by: model.created_by,
            organization_id: model.organization_id,
            score,
            starts_at: model.starts_at,
            finished_at: model.finished_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<Match, DomainError> {
    let model = matches_adapter::insert_match(conn, dto).await?;
    Ok(Match::from(model))
}

/// First match matching `filter`, optionally locked for the rest of the
/// transaction.
pub async fn find_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &MatchFilter,
    lock_for_update: bool,
) -> Result<Option<Match>, DomainError> {
    let model = matches_adapter::find_match(conn, filter, lock_for_update).await?;
    Ok(model.map(Match::from))
}

pub async fn list_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &MatchFilter,
) -> Result<Vec<Match>, DomainError> {
    let models = matches_adapter::select_matches(conn, filter, false).await?;
    Ok(models.into_iter().map(Match::from).collect())
}

pub async fn finish_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    score: Score,
    finished_at: OffsetDateTime,
) -> Result<Match, DomainError> {
    let model = matches_adapter::finish_match(
        conn,
        MatchFinish {
            id,
            score,
            finished_at,
        },
    )
    .await?;
    Ok(Match::from(model))
}
