//! Organization service.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::organizations::{self, Organization};

pub struct OrganizationService;

impl OrganizationService {
    pub fn new() -> Self {
        Self
    }

    /// Register an organization under the id issued by the identity
    /// provider. A second call with the same id fails validation.
    pub async fn create_organization(
        &self,
        txn: &DatabaseTransaction,
        id: &str,
        name: &str,
    ) -> Result<Organization, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::validation_other("organization id cannot be empty"));
        }
        let org = organizations::create_organization(txn, id, name.trim()).await?;
        info!(organization_id = %org.id, "organization created");
        Ok(org)
    }
}

impl Default for OrganizationService {
    fn default() -> Self {
        Self::new()
    }
}
