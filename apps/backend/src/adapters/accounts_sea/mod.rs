//! SeaORM adapter for accounts and their organization links.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::entities::{accounts, organization_accounts};

pub mod dto;

pub use dto::AccountFilter;

pub async fn select_accounts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AccountFilter,
) -> Result<Vec<accounts::Model>, sea_orm::DbErr> {
    let mut query = accounts::Entity::find();

    if let Some(id) = &filter.id {
        query = query.filter(accounts::Column::Id.eq(id.as_str()));
    }
    if let Some(org) = &filter.organization_id {
        query = query
            .join(
                JoinType::InnerJoin,
                accounts::Relation::OrganizationAccounts.def(),
            )
            .filter(organization_accounts::Column::OrganizationId.eq(org.as_str()));
    }

    query
        .order_by_asc(accounts::Column::CreatedAt)
        .order_by_asc(accounts::Column::Id)
        .all(conn)
        .await
}

/// Insert the account unless it exists. Returns the number of rows written.
pub async fn insert_account_if_missing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    now: OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    let active = accounts::ActiveModel {
        id: Set(id.to_string()),
        created_at: Set(now),
    };
    accounts::Entity::insert(active)
        .on_conflict(
            OnConflict::column(accounts::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}

/// Link the account to the organization unless already linked.
pub async fn link_organization_if_missing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    organization_id: &str,
    account_id: &str,
    now: OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    let active = organization_accounts::ActiveModel {
        organization_id: Set(organization_id.to_string()),
        account_id: Set(account_id.to_string()),
        created_at: Set(now),
    };
    organization_accounts::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([
                organization_accounts::Column::OrganizationId,
                organization_accounts::Column::AccountId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}
