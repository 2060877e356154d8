//! SeaORM adapter for organizations.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use time::OffsetDateTime;

use crate::entities::organizations;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<organizations::Model>, sea_orm::DbErr> {
    organizations::Entity::find_by_id(id.to_string())
        .one(conn)
        .await
}

pub async fn insert_organization<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    name: &str,
) -> Result<organizations::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = organizations::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
