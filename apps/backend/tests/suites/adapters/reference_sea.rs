use scouting_backend::adapters::accounts_sea::{self, AccountFilter};
use scouting_backend::adapters::leagues_sea::{self, LeagueFilter};
use scouting_backend::adapters::organizations_sea;
use scouting_backend::adapters::teams_sea::{self, TeamFilter};
use scouting_backend::infra::state::build_state;
use sea_orm::TransactionTrait;
use time::OffsetDateTime;

#[tokio::test]
async fn league_membership_and_organization_links() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let txn = state.db.begin().await?;

    let org = organizations_sea::insert_organization(&txn, "org_adapters", "Adapters").await?;
    assert_eq!(org.id, "org_adapters");
    assert!(organizations_sea::find_by_id(&txn, "org_adapters").await?.is_some());
    assert!(organizations_sea::find_by_id(&txn, "org_missing").await?.is_none());

    let a = teams_sea::insert_team(&txn, "Alpha").await?;
    let b = teams_sea::insert_team(&txn, "Bravo").await?;
    let c = teams_sea::insert_team(&txn, "Charlie").await?;

    let league = leagues_sea::insert_league(&txn, "North").await?;
    leagues_sea::insert_league_team(&txn, league.id, a.id).await?;
    leagues_sea::insert_league_team(&txn, league.id, b.id).await?;

    let members = teams_sea::select_teams(
        &txn,
        &TeamFilter {
            league_id: Some(league.id),
            ..TeamFilter::default()
        },
    )
    .await?;
    let names: Vec<&str> = members.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);

    let org_filter = TeamFilter {
        organization_id: Some("org_adapters".into()),
        ..TeamFilter::default()
    };
    assert!(teams_sea::select_teams(&txn, &org_filter).await?.is_empty());

    leagues_sea::insert_organization_league(&txn, "org_adapters", league.id).await?;
    let visible = teams_sea::select_teams(&txn, &org_filter).await?;
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|t| t.id != c.id));

    let linked = leagues_sea::select_leagues(
        &txn,
        &LeagueFilter {
            organization_id: Some("org_adapters".into()),
            ..LeagueFilter::default()
        },
    )
    .await?;
    assert_eq!(linked.len(), 1);

    let removed = leagues_sea::delete_organization_leagues(&txn, "org_adapters").await?;
    assert_eq!(removed, 1);
    assert!(teams_sea::select_teams(&txn, &org_filter).await?.is_empty());

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn accounts_are_written_once() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().build().await?;
    let txn = state.db.begin().await?;
    let now = OffsetDateTime::now_utc();

    organizations_sea::insert_organization(&txn, "org_one", "One").await?;
    organizations_sea::insert_organization(&txn, "org_two", "Two").await?;

    assert_eq!(accounts_sea::insert_account_if_missing(&txn, "acc-a", now).await?, 1);
    assert_eq!(accounts_sea::insert_account_if_missing(&txn, "acc-a", now).await?, 0);
    assert_eq!(
        accounts_sea::link_organization_if_missing(&txn, "org_one", "acc-a", now).await?,
        1
    );
    assert_eq!(
        accounts_sea::link_organization_if_missing(&txn, "org_one", "acc-a", now).await?,
        0
    );

    let in_org = |org: &str| AccountFilter {
        id: None,
        organization_id: Some(org.to_string()),
    };
    let one = accounts_sea::select_accounts(&txn, &in_org("org_one")).await?;
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].id, "acc-a");
    assert!(accounts_sea::select_accounts(&txn, &in_org("org_two")).await?.is_empty());

    txn.rollback().await?;
    Ok(())
}
