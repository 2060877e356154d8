use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseBackend, Statement};
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Organizations {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    CreatedAt,
}

#[derive(Iden)]
enum OrganizationAccounts {
    Table,
    OrganizationId,
    AccountId,
    CreatedAt,
}

#[derive(Iden)]
enum Leagues {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum OrganizationLeagues {
    Table,
    OrganizationId,
    LeagueId,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LeagueTeams {
    Table,
    LeagueId,
    TeamId,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    LeagueId,
    HomeTeamId,
    AwayTeamId,
    CreatedBy,
    HomeScore,
    AwayScore,
    OrganizationId,
    StartsAt,
    FinishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MatchScouts {
    Table,
    MatchId,
    AccountId,
    Mode,
    Submode,
    FinishedAt,
    CreatedAt,
}

#[derive(Iden)]
enum ScoutModeEnum {
    #[iden = "scout_mode"]
    Type,
}

#[derive(Iden)]
enum ScoutSubmodeEnum {
    #[iden = "scout_submode"]
    Type,
}

fn created_updated(table: &mut TableCreateStatement, created: impl IntoIden, updated: impl IntoIden) {
    table
        .col(
            ColumnDef::new(created)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(updated)
                .timestamp_with_time_zone()
                .not_null(),
        );
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Postgres enums; SQLite stores them as TEXT
        match manager.get_database_backend() {
            DatabaseBackend::Postgres => {
                async fn enum_exists(
                    manager: &SchemaManager<'_>,
                    enum_name: &str,
                ) -> Result<bool, DbErr> {
                    let result = manager
                        .get_connection()
                        .query_one(Statement::from_string(
                            DatabaseBackend::Postgres,
                            format!("SELECT 1 FROM pg_type WHERE typname = '{enum_name}'"),
                        ))
                        .await?;
                    Ok(result.is_some())
                }

                if !enum_exists(manager, "scout_mode").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(ScoutModeEnum::Type)
                                .values(["ATTACK", "DEFENCE", "ATTACK_DEFENCE"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "scout_submode").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(ScoutSubmodeEnum::Type)
                                .values([
                                    "ALL_RULES",
                                    "ANY_RULES",
                                    "OUR_RULES",
                                    "NOT_OUR_RULES",
                                    "PLAYS",
                                ])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            DatabaseBackend::Sqlite => {}
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // organizations (ids are issued by the identity provider)
        let mut organizations = Table::create();
        organizations
            .table(Organizations::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Organizations::Id)
                    .string()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(Organizations::Name).string().not_null());
        created_updated(
            &mut organizations,
            Organizations::CreatedAt,
            Organizations::UpdatedAt,
        );
        manager.create_table(organizations.to_owned()).await?;

        // accounts (ids are token subjects)
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).string().not_null().primary_key())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // organization_accounts
        manager
            .create_table(
                Table::create()
                    .table(OrganizationAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrganizationAccounts::OrganizationId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganizationAccounts::AccountId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganizationAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(OrganizationAccounts::OrganizationId)
                            .col(OrganizationAccounts::AccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_accounts_organization_id")
                            .from(
                                OrganizationAccounts::Table,
                                OrganizationAccounts::OrganizationId,
                            )
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_accounts_account_id")
                            .from(OrganizationAccounts::Table, OrganizationAccounts::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // leagues
        let mut leagues = Table::create();
        leagues
            .table(Leagues::Table)
            .if_not_exists()
            .col(ColumnDef::new(Leagues::Id).uuid().not_null().primary_key())
            .col(ColumnDef::new(Leagues::Name).string().not_null());
        created_updated(&mut leagues, Leagues::CreatedAt, Leagues::UpdatedAt);
        manager.create_table(leagues.to_owned()).await?;

        // organization_leagues
        manager
            .create_table(
                Table::create()
                    .table(OrganizationLeagues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrganizationLeagues::OrganizationId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganizationLeagues::LeagueId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(OrganizationLeagues::OrganizationId)
                            .col(OrganizationLeagues::LeagueId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_leagues_organization_id")
                            .from(
                                OrganizationLeagues::Table,
                                OrganizationLeagues::OrganizationId,
                            )
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_leagues_league_id")
                            .from(OrganizationLeagues::Table, OrganizationLeagues::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // teams
        let mut teams = Table::create();
        teams
            .table(Teams::Table)
            .if_not_exists()
            .col(ColumnDef::new(Teams::Id).uuid().not_null().primary_key())
            .col(ColumnDef::new(Teams::Name).string().not_null());
        created_updated(&mut teams, Teams::CreatedAt, Teams::UpdatedAt);
        manager.create_table(teams.to_owned()).await?;

        // league_teams
        manager
            .create_table(
                Table::create()
                    .table(LeagueTeams::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LeagueTeams::LeagueId).uuid().not_null())
                    .col(ColumnDef::new(LeagueTeams::TeamId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(LeagueTeams::LeagueId)
                            .col(LeagueTeams::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_teams_league_id")
                            .from(LeagueTeams::Table, LeagueTeams::LeagueId)
                            .to(Leagues::Table, Leagues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_teams_team_id")
                            .from(LeagueTeams::Table, LeagueTeams::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // matches
        let mut matches = Table::create();
        matches
            .table(Matches::Table)
            .if_not_exists()
            .col(ColumnDef::new(Matches::Id).uuid().not_null().primary_key())
            .col(ColumnDef::new(Matches::LeagueId).uuid().not_null())
            .col(ColumnDef::new(Matches::HomeTeamId).uuid().not_null())
            .col(ColumnDef::new(Matches::AwayTeamId).uuid().not_null())
            .col(ColumnDef::new(Matches::CreatedBy).string().not_null())
            .col(ColumnDef::new(Matches::HomeScore).integer().null())
            .col(ColumnDef::new(Matches::AwayScore).integer().null())
            .col(ColumnDef::new(Matches::OrganizationId).string().not_null())
            .col(
                ColumnDef::new(Matches::StartsAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Matches::FinishedAt)
                    .timestamp_with_time_zone()
                    .null(),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_matches_league_id")
                    .from(Matches::Table, Matches::LeagueId)
                    .to(Leagues::Table, Leagues::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_matches_home_team_id")
                    .from(Matches::Table, Matches::HomeTeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_matches_away_team_id")
                    .from(Matches::Table, Matches::AwayTeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_matches_created_by")
                    .from(Matches::Table, Matches::CreatedBy)
                    .to(Accounts::Table, Accounts::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_matches_organization_id")
                    .from(Matches::Table, Matches::OrganizationId)
                    .to(Organizations::Table, Organizations::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );
        created_updated(&mut matches, Matches::CreatedAt, Matches::UpdatedAt);
        manager.create_table(matches.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_organization_id")
                    .table(Matches::Table)
                    .col(Matches::OrganizationId)
                    .to_owned(),
            )
            .await?;

        // match_scouts: one row per (match, account)
        manager
            .create_table(
                Table::create()
                    .table(MatchScouts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MatchScouts::MatchId).uuid().not_null())
                    .col(ColumnDef::new(MatchScouts::AccountId).string().not_null())
                    .col(
                        ColumnDef::new(MatchScouts::Mode)
                            .custom(ScoutModeEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchScouts::Submode)
                            .custom(ScoutSubmodeEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatchScouts::FinishedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MatchScouts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_match_scouts")
                            .col(MatchScouts::MatchId)
                            .col(MatchScouts::AccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_scouts_match_id")
                            .from(MatchScouts::Table, MatchScouts::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_scouts_account_id")
                            .from(MatchScouts::Table, MatchScouts::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchScouts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeagueTeams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(OrganizationLeagues::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Leagues::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(OrganizationAccounts::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organizations::Table).if_exists().to_owned())
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .drop_type(
                    PgType::drop()
                        .if_exists()
                        .name(ScoutSubmodeEnum::Type)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_type(PgType::drop().if_exists().name(ScoutModeEnum::Type).to_owned())
                .await?;
        }

        Ok(())
    }
}
