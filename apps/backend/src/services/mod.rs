//! Transactional services. Each method runs inside the caller's transaction
//! and returns `DomainError`; the caller commits or rolls back.

pub mod accounts;
pub mod leagues;
pub mod matches;
pub mod organizations;
pub mod teams;
