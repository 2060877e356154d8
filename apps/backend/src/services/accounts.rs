//! Account service.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use crate::adapters::accounts_sea::AccountFilter;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::accounts::{self, Account};
use crate::repos::organizations;

pub struct AccountService;

impl AccountService {
    pub fn new() -> Self {
        Self
    }

    /// Register the token subject as an account of the organization.
    /// Repeat calls are no-ops.
    pub async fn onboard_account(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        account_id: &str,
        now: OffsetDateTime,
    ) -> Result<Account, DomainError> {
        if account_id.trim().is_empty() {
            return Err(DomainError::validation_other("account id cannot be empty"));
        }
        organizations::find_by_id(txn, organization_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Organization, "organization"))?;

        if accounts::onboard(txn, organization_id, account_id, now).await? {
            info!(organization_id, account_id, "account onboarded");
        }
        self.find_account(txn, organization_id, account_id).await
    }

    /// The account, as seen from inside the organization.
    pub async fn find_account(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        account_id: &str,
    ) -> Result<Account, DomainError> {
        let filter = AccountFilter {
            id: Some(account_id.to_string()),
            organization_id: Some(organization_id.to_string()),
        };
        accounts::list_accounts(txn, &filter)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Account, "account"))
    }

    /// Accounts linked to the organization, oldest first.
    pub async fn list_accounts(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
    ) -> Result<Vec<Account>, DomainError> {
        let filter = AccountFilter {
            id: None,
            organization_id: Some(organization_id.to_string()),
        };
        accounts::list_accounts(txn, &filter).await
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
