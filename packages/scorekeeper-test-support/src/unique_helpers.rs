//! Test helpers for generating unique test data
//!
//! This module provides utilities to help generate unique test data using
//! ULIDs to ensure test isolation and avoid conflicts between test runs.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Arguments
/// * `prefix` - The prefix to use for the unique string
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use scorekeeper_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("game");
/// let id2 = unique_str("game");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player name with the given prefix
///
/// # Arguments
/// * `prefix` - The prefix to use for the player name
///
/// # Returns
/// A unique player name in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use scorekeeper_test_support::unique_helpers::unique_player_name;
///
/// let name1 = unique_player_name("Alice");
/// let name2 = unique_player_name("Alice");
/// assert_ne!(name1, name2);
/// assert!(name1.starts_with("Alice-"));
/// ```
pub fn unique_player_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
