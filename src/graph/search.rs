//! Reachability queries over a built graph.
//!
//! All queries are pure: they read a collection snapshot and never touch
//! the graph. `sweep` works on its own copy of the inventory.

use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;

use crate::logic::{Collection, Inventory, LogicContext, Predicate};

use super::region::{Graph, Location, RegionId};

/// Region every search of a seed starts from.
pub const ORIGIN: &str = "Lobby";

impl Graph {
    /// Can `to` be entered from `from` with this collection?
    ///
    /// Breadth-first over transitions whose guard currently holds. Unknown
    /// region names are never reachable.
    #[must_use]
    pub fn is_reachable(&self, from: &str, to: &str, collection: &dyn Collection) -> bool {
        let (Ok(from), Ok(to)) = (self.region_id(from), self.region_id(to)) else {
            return false;
        };
        self.reachable_from(from, collection)[to.index()]
    }

    /// Regions reachable from the origin, in registration order.
    #[must_use]
    pub fn reachable_regions(&self, collection: &dyn Collection) -> Vec<RegionId> {
        let Ok(origin) = self.region_id(ORIGIN) else {
            return Vec::new();
        };
        self.reachable_from(origin, collection)
            .iter()
            .enumerate()
            .filter(|(_, reached)| **reached)
            .map(|(index, _)| RegionId::new(index as u32))
            .collect()
    }

    /// Can a location be checked from the origin with this collection?
    #[must_use]
    pub fn can_reach_location(&self, name: &str, collection: &dyn Collection) -> bool {
        let Some(location) = self.location(name) else {
            return false;
        };
        self.is_reachable(ORIGIN, self.region_name(location.region), collection)
            && self.evaluate(&location.access, collection)
    }

    /// Every location that can be checked with this collection.
    #[must_use]
    pub fn accessible_locations(&self, collection: &dyn Collection) -> Vec<&Location> {
        let reachable = match self.region_id(ORIGIN) {
            Ok(origin) => self.reachable_from(origin, collection),
            Err(_) => return Vec::new(),
        };
        self.locations()
            .filter(|l| reachable[l.region.index()] && self.evaluate(&l.access, collection))
            .collect()
    }

    /// Collect every locked item that becomes accessible, repeating until
    /// nothing new opens up.
    #[must_use]
    pub fn sweep(&self, start: &Inventory) -> Inventory {
        let mut state = start.clone();
        let mut collected: FxHashSet<usize> = FxHashSet::default();

        loop {
            let reachable = match self.region_id(ORIGIN) {
                Ok(origin) => self.reachable_from(origin, &state),
                Err(_) => return state,
            };

            let mut found = Vec::new();
            for (index, location) in self.locations().enumerate() {
                let Some(item) = &location.locked_item else {
                    continue;
                };
                if collected.contains(&index) || !reachable[location.region.index()] {
                    continue;
                }
                if self.evaluate(&location.access, &state) {
                    found.push((index, item.clone()));
                }
            }

            if found.is_empty() {
                return state;
            }
            for (index, item) in found {
                if let Some(location) = self.location_at(index) {
                    debug!("sweep collected {item} at {}", location.name);
                }
                collected.insert(index);
                state.add(item);
            }
        }
    }

    /// Does the completion predicate hold after sweeping?
    #[must_use]
    pub fn is_beatable(&self, start: &Inventory) -> bool {
        let state = self.sweep(start);
        self.evaluate(self.completion(), &state)
    }

    /// Evaluate a predicate against this graph's route order.
    #[must_use]
    pub fn evaluate(&self, predicate: &Predicate, collection: &dyn Collection) -> bool {
        predicate.evaluate(&LogicContext::new(collection, self.order()))
    }

    fn reachable_from(&self, start: RegionId, collection: &dyn Collection) -> Vec<bool> {
        let mut visited = vec![false; self.region_count()];
        let mut queue = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let Some(region) = self.region(current) else {
                continue;
            };
            for exit in &region.exits {
                let Some(transition) = self.transition(*exit) else {
                    continue;
                };
                let next = transition.destination.index();
                if visited[next] || !self.evaluate(&transition.guard, collection) {
                    continue;
                }
                visited[next] = true;
                queue.push_back(transition.destination);
            }
        }

        visited
    }

    fn region_name(&self, id: RegionId) -> &str {
        self.region(id).map_or("", |r| r.name.as_str())
    }
}
