//! Account repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::accounts_sea::{self as accounts_adapter, AccountFilter};
use crate::entities::accounts;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
        }
    }
}

pub async fn list_accounts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &AccountFilter,
) -> Result<Vec<Account>, DomainError> {
    let models = accounts_adapter::select_accounts(conn, filter).await?;
    Ok(models.into_iter().map(Account::from).collect())
}

/// Make sure the account exists and is linked to the organization.
/// Returns true when either row was written.
pub async fn onboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    organization_id: &str,
    account_id: &str,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    let created = accounts_adapter::insert_account_if_missing(conn, account_id, now).await?;
    let linked =
        accounts_adapter::link_organization_if_missing(conn, organization_id, account_id, now)
            .await?;
    Ok(created + linked > 0)
}
