//! SeaORM adapter for leagues and their membership links.

use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::{league_teams, leagues, organization_leagues};

pub mod dto;

pub use dto::LeagueFilter;

pub async fn select_leagues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &LeagueFilter,
) -> Result<Vec<leagues::Model>, sea_orm::DbErr> {
    let mut query = leagues::Entity::find();

    if !filter.ids.is_empty() {
        query = query.filter(leagues::Column::Id.is_in(filter.ids.clone()));
    }
    if let Some(org) = &filter.organization_id {
        let linked = Query::select()
            .column(organization_leagues::Column::LeagueId)
            .from(organization_leagues::Entity)
            .and_where(organization_leagues::Column::OrganizationId.eq(org.as_str()))
            .to_owned();
        query = query.filter(leagues::Column::Id.in_subquery(linked));
    }

    query
        .order_by_asc(leagues::Column::Name)
        .order_by_asc(leagues::Column::Id)
        .all(conn)
        .await
}

pub async fn insert_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<leagues::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = leagues::ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn insert_league_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    league_id: Uuid,
    team_id: Uuid,
) -> Result<(), sea_orm::DbErr> {
    league_teams::Entity::insert(league_teams::ActiveModel {
        league_id: Set(league_id),
        team_id: Set(team_id),
    })
    .exec_without_returning(conn)
    .await?;
    Ok(())
}

pub async fn delete_organization_leagues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    organization_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = organization_leagues::Entity::delete_many()
        .filter(organization_leagues::Column::OrganizationId.eq(organization_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn insert_organization_league<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    organization_id: &str,
    league_id: Uuid,
) -> Result<(), sea_orm::DbErr> {
    organization_leagues::Entity::insert(organization_leagues::ActiveModel {
        organization_id: Set(organization_id.to_string()),
        league_id: Set(league_id),
    })
    .exec_without_returning(conn)
    .await?;
    Ok(())
}
