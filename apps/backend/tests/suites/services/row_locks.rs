//! Lifecycle writes against a recording Postgres connection: the first
//! statement each one issues must lock the match row.

use scouting_backend::domain::coverage::{Coverage, Mode, Submode};
use scouting_backend::domain::lifecycle::Score;
use scouting_backend::entities::match_scouts::{self, ScoutMode, ScoutSubmode};
use scouting_backend::entities::matches;
use scouting_backend::services::matches::MatchService;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, TransactionTrait,
};
use time::OffsetDateTime;
use uuid::Uuid;

const ORG: &str = "org_locks";
const SCOUT: &str = "acc_locks";

fn match_row(id: Uuid, finished: Option<(Score, OffsetDateTime)>) -> matches::Model {
    let now = OffsetDateTime::now_utc();
    matches::Model {
        id,
        league_id: Uuid::now_v7(),
        home_team_id: Uuid::now_v7(),
        away_team_id: Uuid::now_v7(),
        created_by: "acc_creator".into(),
        home_score: finished.map(|(s, _)| s.home),
        away_score: finished.map(|(s, _)| s.away),
        organization_id: ORG.into(),
        starts_at: now,
        finished_at: finished.map(|(_, at)| at),
        created_at: now,
        updated_at: now,
    }
}

fn scout_row(match_id: Uuid, finished_at: Option<OffsetDateTime>) -> match_scouts::Model {
    match_scouts::Model {
        match_id,
        account_id: SCOUT.into(),
        mode: ScoutMode::Attack,
        submode: ScoutSubmode::Plays,
        finished_at,
        created_at: OffsetDateTime::now_utc(),
    }
}

fn written(rows: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: rows,
    }
}

/// Every statement that reads from `matches`, in execution order.
fn match_reads(db: DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.sql.clone()))
        .filter(|sql| sql.starts_with("SELECT") && sql.contains(r#"FROM "matches""#))
        .collect()
}

fn assert_first_read_locks(reads: &[String]) {
    let first = reads.first().expect("match row read");
    assert!(first.contains("FOR UPDATE"), "{first}");
}

#[tokio::test]
async fn claim_locks_the_match_row() -> Result<(), Box<dyn std::error::Error>> {
    let match_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![match_row(match_id, None)]])
        .append_query_results([Vec::<match_scouts::Model>::new()])
        .append_exec_results([written(1), written(1)])
        .append_query_results([vec![scout_row(match_id, None)]])
        .into_connection();

    let txn = db.begin().await?;
    let claimed = MatchService::new()
        .claim_assignment(
            &txn,
            ORG,
            match_id,
            SCOUT,
            Coverage::new(Mode::Attack, Submode::Plays),
        )
        .await?;
    txn.commit().await?;
    assert_eq!(claimed.account_id, SCOUT);

    assert_first_read_locks(&match_reads(db));
    Ok(())
}

#[tokio::test]
async fn finish_locks_the_match_row() -> Result<(), Box<dyn std::error::Error>> {
    let match_id = Uuid::now_v7();
    let score = Score { home: 82, away: 75 };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![match_row(match_id, None)]])
        .append_query_results([Vec::<match_scouts::Model>::new()])
        .append_exec_results([written(1)])
        .append_query_results([vec![match_row(
            match_id,
            Some((score, OffsetDateTime::now_utc())),
        )]])
        .into_connection();

    let txn = db.begin().await?;
    let finished = MatchService::new()
        .finish_match(&txn, ORG, match_id, score, OffsetDateTime::now_utc())
        .await?;
    txn.commit().await?;
    assert_eq!(finished.score, Some(score));

    assert_first_read_locks(&match_reads(db));
    Ok(())
}

#[tokio::test]
async fn complete_locks_the_match_row() -> Result<(), Box<dyn std::error::Error>> {
    let match_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![match_row(match_id, None)]])
        .append_query_results([vec![scout_row(match_id, None)]])
        .append_exec_results([written(1)])
        .append_query_results([vec![scout_row(match_id, Some(OffsetDateTime::now_utc()))]])
        .into_connection();

    let txn = db.begin().await?;
    let done = MatchService::new()
        .complete_assignment(&txn, ORG, match_id, SCOUT, OffsetDateTime::now_utc())
        .await?;
    txn.commit().await?;
    assert!(done.finished_at.is_some());

    assert_first_read_locks(&match_reads(db));
    Ok(())
}

#[tokio::test]
async fn listing_takes_no_lock() -> Result<(), Box<dyn std::error::Error>> {
    let match_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![match_row(match_id, None)]])
        .append_query_results([vec![scout_row(match_id, None)]])
        .into_connection();

    let txn = db.begin().await?;
    let listed = MatchService::new()
        .list_assignments(&txn, ORG, match_id)
        .await?;
    txn.commit().await?;
    assert_eq!(listed.len(), 1);

    let reads = match_reads(db);
    assert!(!reads.is_empty());
    assert!(reads.iter().all(|sql| !sql.contains("FOR UPDATE")));
    Ok(())
}
