//! Infrastructure: pools, state assembly and database error translation.

pub mod db;
pub mod db_errors;
pub mod state;
