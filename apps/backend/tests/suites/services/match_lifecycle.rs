use backend_test_support::unique_helpers::unique_account_id;
use scouting_backend::domain::coverage::{Mode, Submode};
use scouting_backend::domain::lifecycle::{MatchStatus, Score};
use scouting_backend::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use scouting_backend::infra::state::build_state;
use scouting_backend::repos::matches::Match;
use scouting_backend::services::matches::{MatchService, NewMatch};
use scouting_backend::state::app_state::AppState;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::support::factory::{
    claim, complete, in_txn, new_match, schedule_match, seed_league, Fixture,
};

async fn create(state: &AppState, org: &str, new: NewMatch) -> Result<Match, DomainError> {
    let org = org.to_string();
    in_txn(state, |txn| {
        Box::pin(async move {
            MatchService::new()
                .create_match(txn, &org, "creator", new, OffsetDateTime::now_utc())
                .await
        })
    })
    .await
}

async fn finish(state: &AppState, org: &str, match_id: Uuid, score: Score) -> Result<Match, DomainError> {
    let org = org.to_string();
    in_txn(state, |txn| {
        Box::pin(async move {
            MatchService::new()
                .finish_match(txn, &org, match_id, score, OffsetDateTime::now_utc())
                .await
        })
    })
    .await
}

async fn list(state: &AppState, fx: &Fixture, status: MatchStatus) -> Vec<Uuid> {
    let org = fx.org_id.clone();
    in_txn(state, |txn| {
        Box::pin(async move { MatchService::new().list_matches(txn, &org, status).await })
    })
    .await
    .expect("list matches")
    .into_iter()
    .map(|m| m.id)
    .collect()
}

fn validation_kind<T: std::fmt::Debug>(result: Result<T, DomainError>) -> ValidationKind {
    match result {
        Err(DomainError::Validation(kind, _)) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_match_in_linked_league() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;

    let created = create(&state, &fx.org_id, new_match(&fx)).await?;

    assert_eq!(created.league_id, fx.league_id);
    assert_eq!(created.home_team_id, fx.home);
    assert_eq!(created.away_team_id, fx.away);
    assert_eq!(created.organization_id, fx.org_id);
    assert_eq!(created.created_by, "creator");
    assert_eq!(created.score, None);
    assert!(!created.is_finished());
    assert_eq!(list(&state, &fx, MatchStatus::Active).await, vec![created.id]);

    Ok(())
}

#[tokio::test]
async fn create_match_in_unlinked_league_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let other = seed_league(&state).await;

    // `other`'s league exists but is not linked to `fx`'s organization.
    let result = create(&state, &fx.org_id, new_match(&other)).await;

    assert!(matches!(
        result,
        Err(DomainError::NotFound(NotFoundKind::League, _))
    ));
    Ok(())
}

#[tokio::test]
async fn create_match_rejects_non_member_team() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;

    let mut new = new_match(&fx);
    new.away_team_id = fx.outsider;
    let result = create(&state, &fx.org_id, new).await;

    assert_eq!(validation_kind(result), ValidationKind::TeamNotInLeague);
    assert!(list(&state, &fx, MatchStatus::Any).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn create_match_rejects_same_team_and_past_start() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;

    let mut same = new_match(&fx);
    same.away_team_id = fx.home;
    assert_eq!(
        validation_kind(create(&state, &fx.org_id, same).await),
        ValidationKind::SameTeam
    );

    let mut past = new_match(&fx);
    past.starts_at = OffsetDateTime::now_utc() - Duration::hours(1);
    assert_eq!(
        validation_kind(create(&state, &fx.org_id, past).await),
        ValidationKind::StartsInPast
    );
    Ok(())
}

#[tokio::test]
async fn league_membership_is_checked_before_schedule() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let past = OffsetDateTime::now_utc() - Duration::hours(1);

    let mut outsider_in_past = new_match(&fx);
    outsider_in_past.away_team_id = fx.outsider;
    outsider_in_past.starts_at = past;
    assert_eq!(
        validation_kind(create(&state, &fx.org_id, outsider_in_past).await),
        ValidationKind::TeamNotInLeague
    );

    let mut outsider_twice = new_match(&fx);
    outsider_twice.home_team_id = fx.outsider;
    outsider_twice.away_team_id = fx.outsider;
    assert_eq!(
        validation_kind(create(&state, &fx.org_id, outsider_twice).await),
        ValidationKind::TeamNotInLeague
    );

    assert!(list(&state, &fx, MatchStatus::Any).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn finished_scores_are_never_reapplied() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;
    let (attack, defence, late) = (unique_account_id(), unique_account_id(), unique_account_id());

    claim(&state, &fx.org_id, m.id, &attack, Mode::Attack, Submode::AllRules).await?;
    claim(&state, &fx.org_id, m.id, &defence, Mode::Defence, Submode::AllRules).await?;
    complete(&state, &fx.org_id, m.id, &attack).await?;
    complete(&state, &fx.org_id, m.id, &defence).await?;

    let both_sides =
        claim(&state, &fx.org_id, m.id, &late, Mode::AttackDefence, Submode::AnyRules).await;
    assert_eq!(validation_kind(both_sides), ValidationKind::CoverageConflict);

    finish(&state, &fx.org_id, m.id, Score { home: 82, away: 75 }).await?;

    let again = finish(&state, &fx.org_id, m.id, Score { home: 90, away: 80 }).await;
    match again {
        Err(DomainError::Validation(ValidationKind::MatchAlreadyFinished, detail)) => {
            assert_eq!(detail, "match already finished");
        }
        other => panic!("expected match already finished, got {other:?}"),
    }

    let org = fx.org_id.clone();
    let stored = in_txn(&state, |txn| {
        Box::pin(async move {
            MatchService::new()
                .list_matches(txn, &org, MatchStatus::Finished)
                .await
        })
    })
    .await?;
    let stored = stored
        .into_iter()
        .find(|row| row.id == m.id)
        .expect("finished match");
    assert_eq!(stored.score, Some(Score { home: 82, away: 75 }));
    Ok(())
}

#[tokio::test]
async fn finish_waits_for_every_scout() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;
    let (a, b) = (unique_account_id(), unique_account_id());
    let score = Score { home: 82, away: 75 };

    claim(&state, &fx.org_id, m.id, &a, Mode::Attack, Submode::AllRules).await?;
    claim(&state, &fx.org_id, m.id, &b, Mode::Defence, Submode::AllRules).await?;

    assert_eq!(
        validation_kind(finish(&state, &fx.org_id, m.id, score).await),
        ValidationKind::ScoutsNotFinished
    );

    let done = complete(&state, &fx.org_id, m.id, &a).await?;
    assert!(done.finished_at.is_some());
    assert_eq!(
        validation_kind(finish(&state, &fx.org_id, m.id, score).await),
        ValidationKind::ScoutsNotFinished
    );

    complete(&state, &fx.org_id, m.id, &b).await?;
    let finished = finish(&state, &fx.org_id, m.id, score).await?;
    assert_eq!(finished.score, Some(score));
    assert!(finished.finished_at.is_some());

    assert_eq!(
        validation_kind(finish(&state, &fx.org_id, m.id, Score { home: 1, away: 0 }).await),
        ValidationKind::MatchAlreadyFinished
    );

    assert!(list(&state, &fx, MatchStatus::Active).await.is_empty());
    assert_eq!(list(&state, &fx, MatchStatus::Finished).await, vec![m.id]);
    assert_eq!(list(&state, &fx, MatchStatus::Any).await, vec![m.id]);
    Ok(())
}

#[tokio::test]
async fn match_without_scouts_finishes_immediately() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;

    let finished = finish(&state, &fx.org_id, m.id, Score { home: 0, away: 0 }).await?;
    assert_eq!(finished.score, Some(Score { home: 0, away: 0 }));
    Ok(())
}

#[tokio::test]
async fn finished_match_accepts_no_claims() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;
    finish(&state, &fx.org_id, m.id, Score { home: 60, away: 58 }).await?;

    let late = claim(
        &state,
        &fx.org_id,
        m.id,
        &unique_account_id(),
        Mode::Attack,
        Submode::Plays,
    )
    .await;
    assert!(matches!(
        late,
        Err(DomainError::NotFound(NotFoundKind::Match, _))
    ));
    Ok(())
}

#[tokio::test]
async fn complete_requires_an_open_own_assignment() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;
    let scout = unique_account_id();

    assert_eq!(
        validation_kind(complete(&state, &fx.org_id, m.id, &scout).await),
        ValidationKind::ScoutNotFound
    );

    claim(&state, &fx.org_id, m.id, &scout, Mode::Attack, Submode::Plays).await?;
    complete(&state, &fx.org_id, m.id, &scout).await?;
    assert_eq!(
        validation_kind(complete(&state, &fx.org_id, m.id, &scout).await),
        ValidationKind::ScoutAlreadyFinished
    );
    Ok(())
}

#[tokio::test]
async fn negative_score_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;

    let result = finish(&state, &fx.org_id, m.id, Score { home: -2, away: 10 }).await;
    assert!(result.as_ref().is_err_and(DomainError::is_validation));
    assert_eq!(list(&state, &fx, MatchStatus::Active).await, vec![m.id]);
    Ok(())
}

#[tokio::test]
async fn unknown_match_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;

    let result = finish(&state, &fx.org_id, Uuid::now_v7(), Score { home: 1, away: 2 }).await;
    assert!(matches!(
        result,
        Err(DomainError::NotFound(NotFoundKind::Match, _))
    ));
    Ok(())
}
