//! Route slot assignments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Kingdom;

/// Mapping from optional kingdom to its route slot.
///
/// `0` means unassigned, `-1` excluded from the run, and `1..=N` a slot in
/// a run of `N` kingdoms.
///
/// ```
/// use kingdom_logic::catalog::Kingdom;
/// use kingdom_logic::order::OrderMap;
///
/// let order = OrderMap::from_iter([
///     (Kingdom::ScholarsNest, 1),
///     (Kingdom::RedDarkhouse, 1),
///     (Kingdom::KingsArsenal, -1),
/// ]);
///
/// assert_eq!(order.slot(Kingdom::ScholarsNest), Some(1));
/// assert!(order.is_excluded(Kingdom::KingsArsenal));
/// assert_eq!(order.kingdoms_in_slot(1).count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderMap {
    slots: BTreeMap<Kingdom, i32>,
}

impl OrderMap {
    /// Value of a kingdom the solver still has to place.
    pub const UNASSIGNED: i32 = 0;

    /// Value of a kingdom left out of the run.
    pub const EXCLUDED: i32 = -1;

    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a kingdom, if it is in the map.
    #[must_use]
    pub fn get(&self, kingdom: Kingdom) -> Option<i32> {
        self.slots.get(&kingdom).copied()
    }

    /// Set the raw value for a kingdom.
    pub fn set(&mut self, kingdom: Kingdom, value: i32) {
        self.slots.insert(kingdom, value);
    }

    /// Assigned slot of a kingdom, if it has one.
    #[must_use]
    pub fn slot(&self, kingdom: Kingdom) -> Option<u8> {
        self.get(kingdom)
            .filter(|v| *v > 0)
            .and_then(|v| u8::try_from(v).ok())
    }

    /// Is a kingdom marked as excluded?
    #[must_use]
    pub fn is_excluded(&self, kingdom: Kingdom) -> bool {
        self.get(kingdom) == Some(Self::EXCLUDED)
    }

    /// Kingdoms assigned to a slot, in catalog order.
    pub fn kingdoms_in_slot(&self, slot: u8) -> impl Iterator<Item = Kingdom> + '_ {
        let slot = i32::from(slot);
        self.slots
            .iter()
            .filter(move |(_, value)| **value == slot)
            .map(|(kingdom, _)| *kingdom)
    }

    /// Number of kingdoms per slot; index 0 is slot 1.
    #[must_use]
    pub fn occupancy(&self, max_slots: u8) -> Vec<usize> {
        (1..=max_slots)
            .map(|slot| self.kingdoms_in_slot(slot).count())
            .collect()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (Kingdom, i32)> + '_ {
        self.slots.iter().map(|(kingdom, value)| (*kingdom, *value))
    }

    /// Number of kingdoms in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromIterator<(Kingdom, i32)> for OrderMap {
    fn from_iter<I: IntoIterator<Item = (Kingdom, i32)>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<Kingdom, i32>> for OrderMap {
    fn from(slots: BTreeMap<Kingdom, i32>) -> Self {
        Self { slots }
    }
}

impl std::fmt::Display for OrderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (kingdom, value)) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{kingdom}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_values() {
        let order = OrderMap::from_iter([
            (Kingdom::ScholarsNest, 2),
            (Kingdom::KingsArsenal, 0),
            (Kingdom::RedDarkhouse, -1),
        ]);

        assert_eq!(order.slot(Kingdom::ScholarsNest), Some(2));
        assert_eq!(order.slot(Kingdom::KingsArsenal), None);
        assert_eq!(order.slot(Kingdom::RedDarkhouse), None);
        assert_eq!(order.slot(Kingdom::EmeraldLakeside), None);
        assert!(order.is_excluded(Kingdom::RedDarkhouse));
        assert!(!order.is_excluded(Kingdom::EmeraldLakeside));
    }

    #[test]
    fn test_occupancy() {
        let order = OrderMap::from_iter([
            (Kingdom::ScholarsNest, 1),
            (Kingdom::KingsArsenal, 1),
            (Kingdom::RedDarkhouse, 3),
            (Kingdom::ChurchmouseStreets, -1),
        ]);

        assert_eq!(order.occupancy(3), vec![2, 0, 1]);
        assert_eq!(
            order.kingdoms_in_slot(1).collect::<Vec<_>>(),
            vec![Kingdom::ScholarsNest, Kingdom::KingsArsenal]
        );
    }

    #[test]
    fn test_display() {
        let order = OrderMap::from_iter([(Kingdom::RedDarkhouse, 2), (Kingdom::ScholarsNest, 1)]);
        assert_eq!(order.to_string(), "{Scholar's Nest: 1, Red Darkhouse: 2}");
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let order = OrderMap::from_iter([(Kingdom::ScholarsNest, 1)]);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"Scholar's Nest":1}"#);

        let parsed: OrderMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
