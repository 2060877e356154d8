//! Seed data built through the services, each step committed.

use backend_test_support::unique_helpers::{unique_account_id, unique_org_id, unique_str};
use futures_util::future::LocalBoxFuture;
use scouting_backend::domain::assignment::Assignment;
use scouting_backend::domain::coverage::{Coverage, Mode, Submode};
use scouting_backend::errors::domain::DomainError;
use scouting_backend::repos::matches::Match;
use scouting_backend::services::leagues::{LeagueService, NewLeague};
use scouting_backend::services::matches::{MatchService, NewMatch};
use scouting_backend::services::organizations::OrganizationService;
use scouting_backend::services::teams::{NewTeam, TeamService};
use scouting_backend::state::app_state::AppState;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// One organization linked to one league holding `home` and `away`.
/// `outsider` exists but belongs to no league.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub org_id: String,
    pub league_id: Uuid,
    pub home: Uuid,
    pub away: Uuid,
    pub outsider: Uuid,
}

/// Run `f` in its own transaction: commit on `Ok`, roll back on `Err`.
pub async fn in_txn<R, F>(state: &AppState, f: F) -> Result<R, DomainError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> LocalBoxFuture<'t, Result<R, DomainError>>,
{
    let txn = state.db.begin().await?;
    match f(&txn).await {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            txn.rollback().await?;
            Err(err)
        }
    }
}

pub async fn seed_league(state: &AppState) -> Fixture {
    let org_id = unique_org_id();
    let org = org_id.clone();

    in_txn(state, |txn| {
        Box::pin(async move {
            OrganizationService::new()
                .create_organization(txn, &org, "Scouting Club")
                .await?;

            let teams = TeamService::new();
            let home = teams
                .create_team(txn, NewTeam { name: unique_str("home") })
                .await?;
            let away = teams
                .create_team(txn, NewTeam { name: unique_str("away") })
                .await?;
            let outsider = teams
                .create_team(txn, NewTeam { name: unique_str("outsider") })
                .await?;

            let leagues = LeagueService::new();
            let league = leagues
                .create_league(
                    txn,
                    NewLeague {
                        name: unique_str("league"),
                        team_ids: vec![home.id, away.id],
                    },
                )
                .await?;
            leagues
                .update_organization_leagues(txn, &org, vec![league.id])
                .await?;

            Ok(Fixture {
                org_id: org,
                league_id: league.id,
                home: home.id,
                away: away.id,
                outsider: outsider.id,
            })
        })
    })
    .await
    .expect("seed league")
}

pub fn new_match(fx: &Fixture) -> NewMatch {
    NewMatch {
        league_id: fx.league_id,
        home_team_id: fx.home,
        away_team_id: fx.away,
        starts_at: OffsetDateTime::now_utc() + Duration::hours(1),
    }
}

/// A scheduled match between the fixture's two league teams.
pub async fn schedule_match(state: &AppState, fx: &Fixture) -> Match {
    let org = fx.org_id.clone();
    let new = new_match(fx);
    in_txn(state, |txn| {
        Box::pin(async move {
            MatchService::new()
                .create_match(txn, &org, &unique_account_id(), new, OffsetDateTime::now_utc())
                .await
        })
    })
    .await
    .expect("schedule match")
}

pub async fn claim(
    state: &AppState,
    org: &str,
    match_id: Uuid,
    account: &str,
    mode: Mode,
    submode: Submode,
) -> Result<Assignment, DomainError> {
    let (org, account) = (org.to_string(), account.to_string());
    in_txn(state, |txn| {
        Box::pin(async move {
            MatchService::new()
                .claim_assignment(txn, &org, match_id, &account, Coverage::new(mode, submode))
                .await
        })
    })
    .await
}

pub async fn complete(
    state: &AppState,
    org: &str,
    match_id: Uuid,
    account: &str,
) -> Result<Assignment, DomainError> {
    let (org, account) = (org.to_string(), account.to_string());
    in_txn(state, |txn| {
        Box::pin(async move {
            MatchService::new()
                .complete_assignment(txn, &org, match_id, &account, OffsetDateTime::now_utc())
                .await
        })
    })
    .await
}
