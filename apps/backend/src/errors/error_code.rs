//! Error codes for the scouting backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

use crate::errors::domain::{InfraErrorKind, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Token carries no active organization
    NoActiveOrganization,
    /// Access denied
    Forbidden,
    /// Token lacks the permission required by the route
    MissingPermission,

    // Request Validation
    /// Invalid match identifier
    InvalidMatchId,
    /// Malformed request body or query
    BadRequest,
    /// General validation error
    ValidationError,
    /// Account already scouts this match
    AlreadyScouting,
    /// Mode/submode combination not valid
    InvalidModeSubmode,
    /// Claim conflicts with another scout's coverage
    CoverageConflict,
    /// Match is already finished
    MatchAlreadyFinished,
    /// Not every scout has finished
    ScoutsNotFinished,
    /// Caller has no assignment on the match
    ScoutNotFound,
    /// Caller's assignment is already finished
    ScoutAlreadyFinished,
    /// Team is not a member of the league
    TeamNotInLeague,
    /// Match start time lies in the past
    StartsInPast,
    /// Home and away team are the same
    SameTeam,

    // Resource Not Found
    MatchNotFound,
    LeagueNotFound,
    TeamNotFound,
    OrganizationNotFound,
    AccountNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::NoActiveOrganization => "NO_ACTIVE_ORGANIZATION",
            Self::Forbidden => "FORBIDDEN",
            Self::MissingPermission => "MISSING_PERMISSION",

            Self::InvalidMatchId => "INVALID_MATCH_ID",
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::AlreadyScouting => "ALREADY_SCOUTING",
            Self::InvalidModeSubmode => "INVALID_MODE_SUBMODE",
            Self::CoverageConflict => "COVERAGE_CONFLICT",
            Self::MatchAlreadyFinished => "MATCH_ALREADY_FINISHED",
            Self::ScoutsNotFinished => "SCOUTS_NOT_FINISHED",
            Self::ScoutNotFound => "SCOUT_NOT_FOUND",
            Self::ScoutAlreadyFinished => "SCOUT_ALREADY_FINISHED",
            Self::TeamNotInLeague => "TEAM_NOT_IN_LEAGUE",
            Self::StartsInPast => "STARTS_IN_PAST",
            Self::SameTeam => "SAME_TEAM",

            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::LeagueNotFound => "LEAGUE_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::OrganizationNotFound => "ORGANIZATION_NOT_FOUND",
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::AlreadyScouting => Self::AlreadyScouting,
            ValidationKind::InvalidModeSubmode => Self::InvalidModeSubmode,
            ValidationKind::CoverageConflict => Self::CoverageConflict,
            ValidationKind::MatchAlreadyFinished => Self::MatchAlreadyFinished,
            ValidationKind::ScoutsNotFinished => Self::ScoutsNotFinished,
            ValidationKind::ScoutNotFound => Self::ScoutNotFound,
            ValidationKind::ScoutAlreadyFinished => Self::ScoutAlreadyFinished,
            ValidationKind::TeamNotInLeague => Self::TeamNotInLeague,
            ValidationKind::StartsInPast => Self::StartsInPast,
            ValidationKind::SameTeam => Self::SameTeam,
            ValidationKind::Other(_) => Self::ValidationError,
        }
    }
}

impl From<&NotFoundKind> for ErrorCode {
    fn from(kind: &NotFoundKind) -> Self {
        match kind {
            NotFoundKind::Match => Self::MatchNotFound,
            NotFoundKind::League => Self::LeagueNotFound,
            NotFoundKind::Team => Self::TeamNotFound,
            NotFoundKind::Organization => Self::OrganizationNotFound,
            NotFoundKind::Account => Self::AccountNotFound,
            NotFoundKind::Other(_) => Self::NotFound,
        }
    }
}

impl From<&InfraErrorKind> for ErrorCode {
    fn from(kind: &InfraErrorKind) -> Self {
        match kind {
            InfraErrorKind::Timeout => Self::DbTimeout,
            InfraErrorKind::DbUnavailable => Self::DbUnavailable,
            InfraErrorKind::DataCorruption => Self::DataCorruption,
            InfraErrorKind::Other(_) => Self::DbError,
        }
    }
}
