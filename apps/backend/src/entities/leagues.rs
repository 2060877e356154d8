use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leagues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::organization_leagues::Entity")]
    OrganizationLeagues,
    #[sea_orm(has_many = "super::league_teams::Entity")]
    LeagueTeams,
}

impl Related<super::organization_leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganizationLeagues.def()
    }
}

impl Related<super::league_teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueTeams.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
