//! SeaORM adapter for scout assignments (`match_scouts`).

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::match_scouts::{self, ScoutMode, ScoutSubmode};
use crate::entities::matches;

pub mod dto;

pub use dto::{AssignmentCreate, AssignmentFilter};

pub async fn select_assignments<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AssignmentFilter,
) -> Result<Vec<match_scouts::Model>, sea_orm::DbErr> {
    let mut query = match_scouts::Entity::find();

    if let Some(match_id) = filter.match_id {
        query = query.filter(match_scouts::Column::MatchId.eq(match_id));
    }
    if let Some(org) = &filter.match_organization_id {
        query = query
            .join(JoinType::InnerJoin, match_scouts::Relation::Match.def())
            .filter(matches::Column::OrganizationId.eq(org.as_str()));
    }

    query
        .order_by_asc(match_scouts::Column::CreatedAt)
        .order_by_asc(match_scouts::Column::AccountId)
        .all(conn)
        .await
}

pub async fn insert_assignment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AssignmentCreate,
) -> Result<match_scouts::Model, sea_orm::DbErr> {
    let active = match_scouts::ActiveModel {
        match_id: Set(dto.match_id),
        account_id: Set(dto.account_id),
        mode: Set(ScoutMode::from(dto.coverage.mode)),
        submode: Set(ScoutSubmode::from(dto.coverage.submode)),
        finished_at: Set(None),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    active.insert(conn).await
}

/// Stamp an open assignment as finished. An absent or already finished
/// assignment yields `RecordNotFound`.
pub async fn finish_assignment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    account_id: &str,
    finished_at: OffsetDateTime,
) -> Result<match_scouts::Model, sea_orm::DbErr> {
    let result = match_scouts::Entity::update_many()
        .col_expr(
            match_scouts::Column::FinishedAt,
            Expr::val(Some(finished_at)).into(),
        )
        .filter(match_scouts::Column::MatchId.eq(match_id))
        .filter(match_scouts::Column::AccountId.eq(account_id))
        .filter(match_scouts::Column::FinishedAt.is_null())
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "open assignment on match {match_id}"
        )));
    }

    match_scouts::Entity::find_by_id((match_id, account_id.to_string()))
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("assignment on match {match_id}")))
}
