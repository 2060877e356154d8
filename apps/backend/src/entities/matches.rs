use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "league_id")]
    pub league_id: Uuid,
    #[sea_orm(column_name = "home_team_id")]
    pub home_team_id: Uuid,
    #[sea_orm(column_name = "away_team_id")]
    pub away_team_id: Uuid,
    /// Account that scheduled the match
    #[sea_orm(column_name = "created_by")]
    pub created_by: String,
    #[sea_orm(column_name = "home_score")]
    pub home_score: Option<i32>,
    #[sea_orm(column_name = "away_score")]
    pub away_score: Option<i32>,
    #[sea_orm(column_name = "organization_id")]
    pub organization_id: String,
    #[sea_orm(column_name = "starts_at")]
    pub starts_at: OffsetDateTime,
    /// Set together with both scores, once
    #[sea_orm(column_name = "finished_at")]
    pub finished_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizations::Entity",
        from = "Column::OrganizationId",
        to = "super::organizations::Column::Id"
    )]
    Organization,
    #[sea_orm(
        belongs_to = "super::leagues::Entity",
        from = "Column::LeagueId",
        to = "super::leagues::Column::Id"
    )]
    League,
    #[sea_orm(has_many = "super::match_scouts::Entity")]
    MatchScouts,
}

impl Related<super::organizations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<super::match_scouts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchScouts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
