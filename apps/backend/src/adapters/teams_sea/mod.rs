//! SeaORM adapter for teams.

use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::{league_teams, organization_leagues, teams};

pub mod dto;

pub use dto::TeamFilter;

pub async fn select_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &TeamFilter,
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    let mut query = teams::Entity::find();

    if !filter.ids.is_empty() {
        query = query.filter(teams::Column::Id.is_in(filter.ids.clone()));
    }
    if let Some(league_id) = filter.league_id {
        let members = Query::select()
            .column(league_teams::Column::TeamId)
            .from(league_teams::Entity)
            .and_where(league_teams::Column::LeagueId.eq(league_id))
            .to_owned();
        query = query.filter(teams::Column::Id.in_subquery(members));
    }
    if let Some(org) = &filter.organization_id {
        let org_leagues = Query::select()
            .column(organization_leagues::Column::LeagueId)
            .from(organization_leagues::Entity)
            .and_where(organization_leagues::Column::OrganizationId.eq(org.as_str()))
            .to_owned();
        let members = Query::select()
            .column(league_teams::Column::TeamId)
            .from(league_teams::Entity)
            .and_where(league_teams::Column::LeagueId.in_subquery(org_leagues))
            .to_owned();
        query = query.filter(teams::Column::Id.in_subquery(members));
    }

    query
        .order_by_asc(teams::Column::Name)
        .order_by_asc(teams::Column::Id)
        .all(conn)
        .await
}

pub async fn insert_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = teams::ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
