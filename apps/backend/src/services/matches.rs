//! Match lifecycle: scheduling, assignment claims and completion, finishing.

use sea_orm::DatabaseTransaction;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::adapters::match_scouts_sea::AssignmentFilter;
use crate::adapters::matches_sea::{MatchCreate, MatchFilter};
use crate::adapters::teams_sea::TeamFilter;
use crate::domain::assignment::{validate_claim, Assignment};
use crate::domain::coverage::Coverage;
use crate::domain::lifecycle::{self, MatchStatus, Score};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::matches::Match;
use crate::repos::{accounts, assignments, leagues, matches, teams};

/// Request to schedule a match.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMatch {
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
}

fn match_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Match, "match")
}

/// Match lifecycle service.
pub struct MatchService;

impl MatchService {
    pub fn new() -> Self {
        Self
    }

    /// Schedule a match in a league linked to `organization_id`.
    pub async fn create_match(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        created_by: &str,
        new: NewMatch,
        now: OffsetDateTime,
    ) -> Result<Match, DomainError> {
        let league = leagues::find_in_organization(txn, new.league_id, organization_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::League, "league"))?;

        let mut team_ids = vec![new.home_team_id, new.away_team_id];
        team_ids.dedup();
        let members = teams::list_teams(
            txn,
            &TeamFilter {
                ids: team_ids.clone(),
                league_id: Some(league.id),
                organization_id: None,
            },
        )
        .await?;
        if members.len() != team_ids.len() {
            return Err(DomainError::validation(
                ValidationKind::TeamNotInLeague,
                "team not found in league",
            ));
        }

        lifecycle::validate_schedule(new.home_team_id, new.away_team_id, new.starts_at, now)?;
        accounts::onboard(txn, organization_id, created_by, now).await?;

        let created = matches::create_match(
            txn,
            MatchCreate {
                league_id: league.id,
                home_team_id: new.home_team_id,
                away_team_id: new.away_team_id,
                organization_id: organization_id.to_string(),
                created_by: created_by.to_string(),
                starts_at: new.starts_at,
            },
        )
        .await?;

        info!(
            match_id = %created.id,
            organization_id,
            league_id = %league.id,
            "match created"
        );
        Ok(created)
    }

    /// Claim a coverage slice of an unfinished match for `account_id`.
    ///
    /// The match row is locked first, so a concurrent claim waits here and
    /// then validates against the assignment set this one leaves behind.
    pub async fn claim_assignment(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        match_id: Uuid,
        account_id: &str,
        coverage: Coverage,
    ) -> Result<Assignment, DomainError> {
        let filter = MatchFilter::new(MatchStatus::Active)
            .with_id(match_id)
            .in_organization(organization_id);
        matches::find_match(txn, &filter, true)
            .await?
            .ok_or_else(match_not_found)?;

        let existing =
            assignments::list_assignments(txn, &AssignmentFilter::for_match(match_id)).await?;

        if let Err(err) = validate_claim(&existing, account_id, coverage) {
            debug!(%match_id, account_id, mode = %coverage.mode, submode = %coverage.submode, error = %err, "claim rejected");
            return Err(err);
        }

        accounts::onboard(txn, organization_id, account_id, OffsetDateTime::now_utc()).await?;
        let assignment =
            assignments::create_assignment(txn, match_id, account_id, coverage).await?;

        info!(
            %match_id,
            organization_id,
            account_id,
            mode = %coverage.mode,
            submode = %coverage.submode,
            "assignment claimed"
        );
        Ok(assignment)
    }

    /// Mark the caller's own assignment on the match as finished.
    pub async fn complete_assignment(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        match_id: Uuid,
        account_id: &str,
        now: OffsetDateTime,
    ) -> Result<Assignment, DomainError> {
        let filter = MatchFilter::new(MatchStatus::Any)
            .with_id(match_id)
            .in_organization(organization_id);
        matches::find_match(txn, &filter, true)
            .await?
            .ok_or_else(match_not_found)?;

        let existing =
            assignments::list_assignments(txn, &AssignmentFilter::for_match(match_id)).await?;
        let own = existing.iter().find(|a| a.account_id == account_id);
        lifecycle::ensure_completable(own)?;

        let finished = assignments::finish_assignment(txn, match_id, account_id, now).await?;

        info!(%match_id, organization_id, account_id, "assignment completed");
        Ok(finished)
    }

    /// Record the final score. Succeeds once, after every scout is done.
    pub async fn finish_match(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        match_id: Uuid,
        score: Score,
        now: OffsetDateTime,
    ) -> Result<Match, DomainError> {
        let score = score.validate()?;

        let filter = MatchFilter::new(MatchStatus::Any)
            .with_id(match_id)
            .in_organization(organization_id);
        let current = matches::find_match(txn, &filter, true)
            .await?
            .ok_or_else(match_not_found)?;

        let scouts =
            assignments::list_assignments(txn, &AssignmentFilter::for_match(match_id)).await?;
        lifecycle::ensure_finishable(current.finished_at, &scouts)?;

        let finished = matches::finish_match(txn, match_id, score, now).await?;

        info!(
            %match_id,
            organization_id,
            home_score = score.home,
            away_score = score.away,
            "match finished"
        );
        Ok(finished)
    }

    /// No locks.
    pub async fn list_matches(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        status: MatchStatus,
    ) -> Result<Vec<Match>, DomainError> {
        let filter = MatchFilter::new(status).in_organization(organization_id);
        matches::list_matches(txn, &filter).await
    }

    /// Assignments of one match, visible only inside its organization. No locks.
    pub async fn list_assignments(
        &self,
        txn: &DatabaseTransaction,
        organization_id: &str,
        match_id: Uuid,
    ) -> Result<Vec<Assignment>, DomainError> {
        let filter = MatchFilter::new(MatchStatus::Any)
            .with_id(match_id)
            .in_organization(organization_id);
        matches::find_match(txn, &filter, false)
            .await?
            .ok_or_else(match_not_found)?;

        assignments::list_assignments(
            txn,
            &AssignmentFilter::for_match(match_id).in_organization(organization_id),
        )
        .await
    }
}

impl Default for MatchService {
    fn default() -> Self {
        Self::new()
    }
}
