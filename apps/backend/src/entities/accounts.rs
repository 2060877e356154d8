use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Token subject issued by the identity provider
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::organization_accounts::Entity")]
    OrganizationAccounts,
}

impl Related<super::organization_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganizationAccounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
