pub mod accounts;
pub mod league_teams;
pub mod leagues;
pub mod match_scouts;
pub mod matches;
pub mod organization_accounts;
pub mod organization_leagues;
pub mod organizations;
pub mod teams;

pub use accounts::Entity as Accounts;
pub use accounts::Model as Account;
pub use league_teams::Entity as LeagueTeams;
pub use leagues::Entity as Leagues;
pub use leagues::Model as League;
pub use match_scouts::Entity as MatchScouts;
pub use match_scouts::Model as MatchScout;
pub use matches::Entity as Matches;
pub use matches::Model as Match;
pub use organization_accounts::Entity as OrganizationAccounts;
pub use organization_leagues::Entity as OrganizationLeagues;
pub use organizations::Entity as Organizations;
pub use organizations::Model as Organization;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
