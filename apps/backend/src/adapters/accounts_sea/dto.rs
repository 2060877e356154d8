//! DTOs for accounts_sea adapter.

#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    pub id: Option<String>,
    /// Only accounts linked to this organization
    pub organization_id: Option<String>,
}
