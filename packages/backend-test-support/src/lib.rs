//! Backend test support utilities
//!
//! Shared helpers for the scouting backend test binaries: quiet logging
//! initialization, unique identifiers, and problem-details assertions.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
