//! Match lifecycle rules: Scheduled -> Finished, exactly once.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::assignment::Assignment;
use crate::errors::domain::{DomainError, ValidationKind};

/// Explicit listing filter; there is no implied default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Not yet finished
    Active,
    Finished,
    Any,
}

impl FromStr for MatchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            "any" => Ok(Self::Any),
            other => Err(DomainError::validation_other(format!(
                "unknown match status '{other}'"
            ))),
        }
    }
}

/// Final score, applied together with the finish timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: i32,
    pub away: i32,
}

impl Score {
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.home < 0 || self.away < 0 {
            return Err(DomainError::validation_other("scores cannot be negative"));
        }
        Ok(self)
    }
}

/// Check the scheduling inputs of a new match.
pub fn validate_schedule(
    home_team_id: Uuid,
    away_team_id: Uuid,
    starts_at: OffsetDateTime,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    if home_team_id == away_team_id {
        return Err(DomainError::validation(
            ValidationKind::SameTeam,
            "home and away teams must differ",
        ));
    }
    if starts_at < now {
        return Err(DomainError::validation(
            ValidationKind::StartsInPast,
            "starts at cannot be before now",
        ));
    }
    Ok(())
}

/// A match can be finished once, and only when every scout is done.
pub fn ensure_finishable(
    finished_at: Option<OffsetDateTime>,
    assignments: &[Assignment],
) -> Result<(), DomainError> {
    if finished_at.is_some() {
        return Err(DomainError::validation(
            ValidationKind::MatchAlreadyFinished,
            "match already finished",
        ));
    }
    if assignments.iter().any(|a| !a.is_finished()) {
        return Err(DomainError::validation(
            ValidationKind::ScoutsNotFinished,
            "not all scouts have finished",
        ));
    }
    Ok(())
}

/// The caller's own assignment must exist and still be open.
pub fn ensure_completable(own: Option<&Assignment>) -> Result<&Assignment, DomainError> {
    match own {
        None => Err(DomainError::validation(
            ValidationKind::ScoutNotFound,
            "match scout not found",
        )),
        Some(a) if a.is_finished() => Err(DomainError::validation(
            ValidationKind::ScoutAlreadyFinished,
            "match scout already finished",
        )),
        Some(a) => Ok(a),
    }
}
