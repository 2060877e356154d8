//! Assignment repository functions.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::match_scouts_sea::{self as scouts_adapter, AssignmentCreate, AssignmentFilter};
use crate::domain::assignment::Assignment;
use crate::domain::coverage::Coverage;
use crate::entities::match_scouts;
use crate::errors::domain::DomainError;

impl From<match_scouts::Model> for Assignment {
    fn from(model: match_scouts::Model) -> Self {
        Self {
            match_id: model.match_id,
            account_id: model.account_id,
            coverage: Coverage::new(model.mode.into(), model.submode.into()),
            finished_at: model.finished_at,
            created_at: model.created_at,
        }
    }
}

pub async fn list_assignments<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AssignmentFilter,
) -> Result<Vec<Assignment>, DomainError> {
    let models = scouts_adapter::select_assignments(conn, filter).await?;
    Ok(models.into_iter().map(Assignment::from).collect())
}

pub async fn create_assignment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    account_id: &str,
    coverage: Coverage,
) -> Result<Assignment, DomainError> {
    let model = scouts_adapter::insert_assignment(
        conn,
        AssignmentCreate {
            match_id,
            account_id: account_id.to_string(),
            coverage,
        },
    )
    .await?;
    Ok(Assignment::from(model))
}

pub async fn finish_assignment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    account_id: &str,
    finished_at: OffsetDateTime,
) -> Result<Assignment, DomainError> {
    let model = scouts_adapter::finish_assignment(conn, match_id, account_id, finished_at).await?;
    Ok(Assignment::from(model))
}
