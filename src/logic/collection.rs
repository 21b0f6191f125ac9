//! Item collections queried by predicates.
//!
//! `Collection` is the read-only view logic needs. `Inventory` is the
//! in-crate implementation, backed by a persistent map so snapshots taken
//! during a solvability sweep clone in O(1).

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::TokenGroup;

/// Read-only view of the tokens a player holds.
pub trait Collection {
    /// Number of copies held of a token.
    fn count(&self, token: &str) -> u32;

    /// Does the player hold at least one copy?
    fn has(&self, token: &str) -> bool {
        self.count(token) > 0
    }

    /// Does the player hold at least `min_distinct` different members of
    /// the group?
    fn has_group_unique(&self, group: TokenGroup, min_distinct: u32) -> bool {
        let held = group
            .members()
            .into_iter()
            .filter(|member| self.has(member))
            .count();
        held >= min_distinct as usize
    }
}

/// Multiset of held tokens.
///
/// ## Example
///
/// ```
/// use kingdom_logic::logic::{Collection, Inventory};
///
/// let mut inventory = Inventory::new();
/// inventory.add("Progressive Region");
/// inventory.add("Progressive Region");
///
/// let snapshot = inventory.clone();
/// inventory.add("Red Darkhouse");
///
/// assert_eq!(snapshot.count("Progressive Region"), 2);
/// assert!(!snapshot.has("Red Darkhouse"));
/// assert!(inventory.has("Red Darkhouse"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: ImHashMap<String, u32>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory holding one copy of each token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut inventory = Self::new();
        for token in tokens {
            inventory.add(token);
        }
        inventory
    }

    /// Add one copy of a token.
    pub fn add(&mut self, token: impl Into<String>) {
        self.add_many(token, 1);
    }

    /// Add several copies of a token.
    pub fn add_many(&mut self, token: impl Into<String>, copies: u32) {
        if copies == 0 {
            return;
        }
        *self.counts.entry(token.into()).or_insert(0) += copies;
    }

    /// Builder-style `add`.
    #[must_use]
    pub fn with(mut self, token: impl Into<String>) -> Self {
        self.add(token);
        self
    }

    /// Number of distinct tokens held.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over held tokens and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl Collection for Inventory {
    fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }
}
