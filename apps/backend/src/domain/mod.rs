//! Domain layer: coverage rules, claim validation and lifecycle checks.
//! Pure; no database or HTTP types.

pub mod assignment;
pub mod coverage;
pub mod lifecycle;

#[cfg(test)]
mod tests_props_coverage;

pub use assignment::{validate_claim, Assignment};
pub use coverage::{Coverage, Mode, Submode};
pub use lifecycle::{MatchStatus, Score};
