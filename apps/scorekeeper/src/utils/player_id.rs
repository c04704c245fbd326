//! Player id generation.
//!
//! Ids are `p{seat-index}-{ULID}`: the seat index keeps them readable in a
//! serialized record, the ULID guarantees no two ids collide within (or
//! across) games.

use ulid::Ulid;

/// Generate a fresh player id for the given seat index.
///
/// # Example
/// ```
/// use scorekeeper::utils::player_id::player_id;
///
/// let a = player_id(0);
/// let b = player_id(0);
/// assert_ne!(a, b);
/// assert!(a.starts_with("p0-"));
/// ```
pub fn player_id(index: usize) -> String {
    format!("p{}-{}", index, Ulid::new())
}
