//! SeaORM adapters. Generic over `ConnectionTrait`, return raw `DbErr`.

pub mod accounts_sea;
pub mod leagues_sea;
pub mod match_scouts_sea;
pub mod matches_sea;
pub mod organizations_sea;
pub mod teams_sea;
