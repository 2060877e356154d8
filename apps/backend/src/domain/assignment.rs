//! Scout assignments and the claim validator.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::coverage::Coverage;
use crate::errors::domain::{DomainError, ValidationKind};

/// A scout's claim on one coverage slice of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub match_id: Uuid,
    pub account_id: String,
    #[serde(flatten)]
    pub coverage: Coverage,
    #[serde(with = "time::serde::rfc3339::option")]
    pub finished_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Assignment {
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

/// Accept or reject `proposed` for `account_id` against the match's current
/// assignments.
///
/// Checks run in a fixed order so the caller always sees the first rule
/// broken: an existing claim by the same account, then pair validity, then
/// overlap with any existing claim.
pub fn validate_claim(
    existing: &[Assignment],
    account_id: &str,
    proposed: Coverage,
) -> Result<(), DomainError> {
    if existing.iter().any(|a| a.account_id == account_id) {
        return Err(DomainError::validation(
            ValidationKind::AlreadyScouting,
            "account already scouting this match",
        ));
    }

    if !proposed.is_valid() {
        return Err(DomainError::validation(
            ValidationKind::InvalidModeSubmode,
            "mode and submode combination not valid",
        ));
    }

    if existing.iter().any(|a| a.coverage.conflicts_with(proposed)) {
        return Err(DomainError::validation(
            ValidationKind::CoverageConflict,
            "mode and submode conflicts with other scouts",
        ));
    }

    Ok(())
}
