//! Unique test data.

use uuid::Uuid;

/// `{prefix}-{uuid}`, unique per call.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("player");
/// assert!(a.starts_with("player-"));
/// assert_ne!(a, unique_str("player"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// `n` distinct player ids sharing a prefix.
pub fn unique_players(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|_| unique_str(prefix)).collect()
}
