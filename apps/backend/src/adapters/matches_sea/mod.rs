//! SeaORM adapter for matches.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use uuid::Uuid;

use crate::domain::lifecycle::MatchStatus;
use crate::entities::matches;

pub mod dto;

pub use dto::{MatchCreate, MatchFilter, MatchFinish};

/// Query for the matches selected by `filter`. With `lock_for_update` the
/// statement carries `FOR UPDATE` on backends with row locks (Postgres);
/// SQLite drops the clause, its single-connection pool already serializes
/// writers.
pub fn match_query(filter: &MatchFilter, lock_for_update: bool) -> Select<matches::Entity> {
    let mut query = matches::Entity::find();

    if let Some(id) = filter.id {
        query = query.filter(matches::Column::Id.eq(id));
    }
    if let Some(org) = &filter.organization_id {
        query = query.filter(matches::Column::OrganizationId.eq(org.as_str()));
    }
    match filter.status {
        MatchStatus::Active => query = query.filter(matches::Column::FinishedAt.is_null()),
        MatchStatus::Finished => query = query.filter(matches::Column::FinishedAt.is_not_null()),
        MatchStatus::Any => {}
    }
    if lock_for_update {
        query = query.lock_exclusive();
    }

    query
}

/// Select matches, locked until the enclosing transaction ends when
/// `lock_for_update` is set.
pub async fn select_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &MatchFilter,
    lock_for_update: bool,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    match_query(filter, lock_for_update)
        .order_by_asc(matches::Column::StartsAt)
        .order_by_asc(matches::Column::Id)
        .all(conn)
        .await
}

pub async fn find_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &MatchFilter,
    lock_for_update: bool,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    match_query(filter, lock_for_update).one(conn).await
}

pub async fn insert_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = matches::ActiveModel {
        id: Set(Uuid::now_v7()),
        league_id: Set(dto.league_id),
        home_team_id: Set(dto.home_team_id),
        away_team_id: Set(dto.away_team_id),
        created_by: Set(dto.created_by),
        home_score: Set(None),
        away_score: Set(None),
        organization_id: Set(dto.organization_id),
        starts_at: Set(dto.starts_at),
        finished_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

/// Write scores and finish timestamp together. Only an unfinished row is
/// touched; a finished one yields `RecordNotFound`.
pub async fn finish_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchFinish,
) -> Result<matches::Model, sea_orm::DbErr> {
    let result = matches::Entity::update_many()
        .col_expr(matches::Column::HomeScore, Expr::val(Some(dto.score.home)).into())
        .col_expr(matches::Column::AwayScore, Expr::val(Some(dto.score.away)).into())
        .col_expr(matches::Column::FinishedAt, Expr::val(Some(dto.finished_at)).into())
        .col_expr(matches::Column::UpdatedAt, Expr::val(dto.finished_at).into())
        .filter(matches::Column::Id.eq(dto.id))
        .filter(matches::Column::FinishedAt.is_null())
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "unfinished match {}",
            dto.id
        )));
    }

    matches::Entity::find_by_id(dto.id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("match {}", dto.id)))
}
