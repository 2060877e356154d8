use scouting_backend::adapters::accounts_sea;
use scouting_backend::adapters::match_scouts_sea::{self, AssignmentCreate, AssignmentFilter};
use scouting_backend::domain::coverage::{Coverage, Mode, Submode};
use scouting_backend::entities::match_scouts::{ScoutMode, ScoutSubmode};
use scouting_backend::errors::domain::{DomainError, ValidationKind};
use scouting_backend::infra::db_errors::map_db_err;
use scouting_backend::infra::state::build_state;
use sea_orm::{DbErr, TransactionTrait};
use time::OffsetDateTime;

use crate::support::factory::{schedule_match, seed_league};

fn create(match_id: uuid::Uuid, account: &str, mode: Mode, submode: Submode) -> AssignmentCreate {
    AssignmentCreate {
        match_id,
        account_id: account.to_string(),
        coverage: Coverage::new(mode, submode),
    }
}

#[tokio::test]
async fn insert_stores_enum_columns() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;

    let txn = state.db.begin().await?;
    accounts_sea::insert_account_if_missing(&txn, "acc-a", OffsetDateTime::now_utc()).await?;
    let row = match_scouts_sea::insert_assignment(
        &txn,
        create(m.id, "acc-a", Mode::AttackDefence, Submode::NotOurRules),
    )
    .await?;
    assert_eq!(row.mode, ScoutMode::AttackDefence);
    assert_eq!(row.submode, ScoutSubmode::NotOurRules);
    assert!(row.finished_at.is_none());

    let rows =
        match_scouts_sea::select_assignments(&txn, &AssignmentFilter::for_match(m.id)).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].account_id, "acc-a");

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn duplicate_account_maps_to_already_scouting() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;

    let txn = state.db.begin().await?;
    accounts_sea::insert_account_if_missing(&txn, "acc-a", OffsetDateTime::now_utc()).await?;
    match_scouts_sea::insert_assignment(&txn, create(m.id, "acc-a", Mode::Attack, Submode::Plays))
        .await?;
    let err = match_scouts_sea::insert_assignment(
        &txn,
        create(m.id, "acc-a", Mode::Defence, Submode::Plays),
    )
    .await
    .expect_err("primary key must reject a second row");

    assert!(matches!(
        map_db_err(err),
        DomainError::Validation(ValidationKind::AlreadyScouting, _)
    ));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn finish_is_single_shot() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;

    let txn = state.db.begin().await?;
    accounts_sea::insert_account_if_missing(&txn, "acc-a", OffsetDateTime::now_utc()).await?;
    match_scouts_sea::insert_assignment(&txn, create(m.id, "acc-a", Mode::Attack, Submode::Plays))
        .await?;

    let now = OffsetDateTime::now_utc();
    let row = match_scouts_sea::finish_assignment(&txn, m.id, "acc-a", now).await?;
    assert!(row.finished_at.is_some());

    let again = match_scouts_sea::finish_assignment(&txn, m.id, "acc-a", now).await;
    assert!(matches!(again, Err(DbErr::RecordNotFound(_))));

    let missing = match_scouts_sea::finish_assignment(&txn, m.id, "acc-b", now).await;
    assert!(matches!(missing, Err(DbErr::RecordNotFound(_))));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn organization_filter_joins_through_match() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;

    let txn = state.db.begin().await?;
    accounts_sea::insert_account_if_missing(&txn, "acc-a", OffsetDateTime::now_utc()).await?;
    match_scouts_sea::insert_assignment(&txn, create(m.id, "acc-a", Mode::Attack, Submode::Plays))
        .await?;

    let own = match_scouts_sea::select_assignments(
        &txn,
        &AssignmentFilter::for_match(m.id).in_organization(fx.org_id.clone()),
    )
    .await?;
    assert_eq!(own.len(), 1);

    let foreign = match_scouts_sea::select_assignments(
        &txn,
        &AssignmentFilter::for_match(m.id).in_organization("org_elsewhere"),
    )
    .await?;
    assert!(foreign.is_empty());

    txn.rollback().await?;
    Ok(())
}
