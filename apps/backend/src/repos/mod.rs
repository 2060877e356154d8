//! Repository functions: adapters in, domain models and `DomainError` out.

pub mod accounts;
pub mod assignments;
pub mod leagues;
pub mod matches;
pub mod organizations;
pub mod teams;
