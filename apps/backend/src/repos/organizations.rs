//! Organization repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::organizations_sea as orgs_adapter;
use crate::entities::organizations;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<organizations::Model> for Organization {
    fn from(model: organizations::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<Organization>, DomainError> {
    let model = orgs_adapter::find_by_id(conn, id).await?;
    Ok(model.map(Organization::from))
}

pub async fn create_organization<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    name: &str,
) -> Result<Organization, DomainError> {
    let model = orgs_adapter::insert_organization(conn, id, name).await?;
    Ok(Organization::from(model))
}
