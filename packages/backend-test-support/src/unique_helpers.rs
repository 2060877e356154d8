//! Test helpers for generating unique test data
//!
//! ULID-based identifiers keep test data isolated between runs that share a
//! database.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("org");
/// let id2 = unique_str("org");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("org-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique external account id, shaped like the ids issued by the
/// identity provider (`user_<ulid>`).
pub fn unique_account_id() -> String {
    format!("user_{}", Ulid::new())
}

/// Generate a unique organization id (`org_<ulid>`).
pub fn unique_org_id() -> String {
    format!("org_{}", Ulid::new())
}
