//! Unique fixture data backed by ULIDs.
//!
//! Postgres-backed tests share one database, so ids and emails must not
//! collide between runs.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("user");
/// let b = unique_str("user");
/// assert_ne!(a, b);
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email in the format `{prefix}-{ulid}@example.test`.
///
/// ```
/// use test_support::unique_email;
///
/// let email = unique_email("john");
/// assert!(email.starts_with("john-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}

/// Generate a positive user id from the random half of a ULID.
///
/// ```
/// use test_support::unique_id;
///
/// let id = unique_id();
/// assert!(id > 0);
/// assert_ne!(id, unique_id());
/// ```
pub fn unique_id() -> i64 {
    let bits = Ulid::new().random() & (i64::MAX as u128);
    // Zero is reserved so callers can treat it as "unset".
    (bits as i64).max(1)
}
