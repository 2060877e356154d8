use scouting_backend::adapters::matches_sea::{self, MatchFilter, MatchFinish};
use scouting_backend::domain::lifecycle::{MatchStatus, Score};
use scouting_backend::infra::state::build_state;
use sea_orm::{DbBackend, DbErr, QueryTrait, TransactionTrait};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::support::factory::{schedule_match, seed_league};

#[tokio::test]
async fn status_filter_is_explicit() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let open = schedule_match(&state, &fx).await;
    let done = schedule_match(&state, &fx).await;

    let txn = state.db.begin().await?;
    matches_sea::finish_match(
        &txn,
        MatchFinish {
            id: done.id,
            score: Score { home: 70, away: 64 },
            finished_at: OffsetDateTime::now_utc(),
        },
    )
    .await?;

    let in_org = |status| MatchFilter::new(status).in_organization(fx.org_id.clone());

    let active = matches_sea::select_matches(&txn, &in_org(MatchStatus::Active), false).await?;
    assert_eq!(active.iter().map(|m| m.id).collect::<Vec<_>>(), vec![open.id]);

    let finished =
        matches_sea::select_matches(&txn, &in_org(MatchStatus::Finished), false).await?;
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].id, done.id);
    assert_eq!(finished[0].home_score, Some(70));
    assert_eq!(finished[0].away_score, Some(64));

    let any = matches_sea::select_matches(&txn, &in_org(MatchStatus::Any), true).await?;
    assert_eq!(any.len(), 2);

    let elsewhere = matches_sea::select_matches(
        &txn,
        &MatchFilter::new(MatchStatus::Any).in_organization("org_nobody"),
        false,
    )
    .await?;
    assert!(elsewhere.is_empty());

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn finish_touches_only_unfinished_rows() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let fx = seed_league(&state).await;
    let m = schedule_match(&state, &fx).await;

    let txn = state.db.begin().await?;
    let finish = MatchFinish {
        id: m.id,
        score: Score { home: 82, away: 75 },
        finished_at: OffsetDateTime::now_utc(),
    };

    let row = matches_sea::finish_match(&txn, finish).await?;
    assert_eq!(row.home_score, Some(82));
    assert!(row.finished_at.is_some());

    let again = matches_sea::finish_match(
        &txn,
        MatchFinish {
            score: Score { home: 0, away: 0 },
            ..finish
        },
    )
    .await;
    assert!(matches!(again, Err(DbErr::RecordNotFound(_))));

    let row = matches_sea::find_match(
        &txn,
        &MatchFilter::new(MatchStatus::Any).with_id(m.id),
        true,
    )
    .await?
    .expect("match row");
    assert_eq!(row.home_score, Some(82), "second finish left the row untouched");

    txn.rollback().await?;
    Ok(())
}

#[test]
fn locked_lookup_selects_for_update_on_postgres() {
    let filter = MatchFilter::new(MatchStatus::Active)
        .with_id(Uuid::now_v7())
        .in_organization("org_locks");

    let locked = matches_sea::match_query(&filter, true)
        .build(DbBackend::Postgres)
        .to_string();
    assert!(locked.contains("FOR UPDATE"), "{locked}");
    assert!(locked.contains(r#""finished_at" IS NULL"#), "{locked}");

    let plain = matches_sea::match_query(&filter, false)
        .build(DbBackend::Postgres)
        .to_string();
    assert!(!plain.contains("FOR UPDATE"), "{plain}");
}

#[test]
fn sqlite_drops_the_row_lock() {
    let filter = MatchFilter::new(MatchStatus::Any).with_id(Uuid::now_v7());
    let sql = matches_sea::match_query(&filter, true)
        .build(DbBackend::Sqlite)
        .to_string();
    assert!(!sql.contains("FOR UPDATE"), "{sql}");
}
