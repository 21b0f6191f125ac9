//! Regions, transitions and locations.
//!
//! The graph is an append-only registry: regions are registered by unique
//! name, transitions connect two registered regions under a guard, and
//! locations hang off a region. Nothing is removed once added.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::LocationId;
use crate::core::GenerationError;
use crate::logic::Predicate;
use crate::order::OrderMap;

/// Index of a region in its graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Create a new region ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

/// Index of a transition in its graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionId(pub u32);

impl TransitionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A named node of the graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    /// Outgoing transitions, in registration order.
    pub exits: SmallVec<[TransitionId; 4]>,
    /// Locations attached to this region, as indices into the graph.
    pub locations: Vec<usize>,
}

/// A directed, guarded edge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub id: TransitionId,
    pub source: RegionId,
    pub destination: RegionId,
    /// Entrance name, e.g. `"Kingdom Outskirts to Red Darkhouse"`.
    pub label: String,
    pub guard: Predicate,
}

/// A check or event attached to a region.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Catalog id; `None` for events.
    pub id: Option<LocationId>,
    pub region: RegionId,
    /// Extra condition on top of reaching the region.
    pub access: Predicate,
    /// Item fixed at this location, if any.
    pub locked_item: Option<String>,
}

impl Location {
    /// Create a plain check.
    pub fn new(name: impl Into<String>, id: Option<LocationId>, region: RegionId) -> Self {
        Self {
            name: name.into(),
            id,
            region,
            access: Predicate::Always,
            locked_item: None,
        }
    }

    /// Set the access rule (builder pattern).
    #[must_use]
    pub fn with_access(mut self, access: Predicate) -> Self {
        self.access = access;
        self
    }

    /// Lock an item at this location (builder pattern).
    #[must_use]
    pub fn with_locked_item(mut self, item: impl Into<String>) -> Self {
        self.locked_item = Some(item.into());
        self
    }

    /// Is this an event rather than a real check?
    #[must_use]
    pub fn is_event(&self) -> bool {
        self.id.is_none()
    }
}

/// The region graph of one seed.
///
/// ## Example
///
/// ```
/// use kingdom_logic::graph::Graph;
/// use kingdom_logic::logic::{Inventory, Predicate};
/// use kingdom_logic::order::OrderMap;
///
/// let mut graph = Graph::new(OrderMap::new());
/// graph.add_region("Lobby").unwrap();
/// graph.add_region("Vault").unwrap();
/// graph.connect("Lobby", "Vault", "Lobby to Vault", Predicate::has("Key")).unwrap();
///
/// assert!(!graph.is_reachable("Lobby", "Vault", &Inventory::new()));
/// assert!(graph.is_reachable("Lobby", "Vault", &Inventory::new().with("Key")));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graph {
    regions: Vec<Region>,
    transitions: Vec<Transition>,
    locations: Vec<Location>,
    by_name: FxHashMap<String, RegionId>,
    order: OrderMap,
    completion: Predicate,
}

impl Graph {
    /// Create an empty graph whose predicates see `order`.
    #[must_use]
    pub fn new(order: OrderMap) -> Self {
        Self {
            regions: Vec::new(),
            transitions: Vec::new(),
            locations: Vec::new(),
            by_name: FxHashMap::default(),
            order,
            completion: Predicate::Always,
        }
    }

    /// Register a region.
    pub fn add_region(&mut self, name: impl Into<String>) -> Result<RegionId, GenerationError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GenerationError::DuplicateRegion(name));
        }
        let id = RegionId::new(self.regions.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.regions.push(Region {
            id,
            name,
            exits: SmallVec::new(),
            locations: Vec::new(),
        });
        Ok(id)
    }

    /// Connect two registered regions with a guarded transition.
    pub fn connect(
        &mut self,
        source: &str,
        destination: &str,
        label: impl Into<String>,
        guard: Predicate,
    ) -> Result<TransitionId, GenerationError> {
        let source = self.region_id(source)?;
        let destination = self.region_id(destination)?;
        let id = TransitionId(self.transitions.len() as u32);

        self.transitions.push(Transition {
            id,
            source,
            destination,
            label: label.into(),
            guard,
        });
        self.regions[source.index()].exits.push(id);
        Ok(id)
    }

    /// Attach a location to its region.
    pub fn add_location(&mut self, location: Location) -> Result<(), GenerationError> {
        let index = self.locations.len();
        let region = self
            .regions
            .get_mut(location.region.index())
            .ok_or_else(|| GenerationError::UnknownRegion(location.region.to_string()))?;
        region.locations.push(index);
        self.locations.push(location);
        Ok(())
    }

    /// Set the predicate that decides whether the seed is finished.
    pub fn set_completion(&mut self, completion: Predicate) {
        self.completion = completion;
    }

    /// Look up a region id by name.
    pub fn region_id(&self, name: &str) -> Result<RegionId, GenerationError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GenerationError::UnknownRegion(name.to_string()))
    }

    /// Get a region by id.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// Get a region by name.
    #[must_use]
    pub fn region_by_name(&self, name: &str) -> Option<&Region> {
        self.by_name.get(name).and_then(|id| self.region(*id))
    }

    /// Get a transition by id.
    #[must_use]
    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id.0 as usize)
    }

    /// Find a transition by its label.
    #[must_use]
    pub fn transition_by_label(&self, label: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.label == label)
    }

    /// Find a location by name.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// All regions in registration order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// All transitions in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    /// All locations in registration order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// The route order predicates are evaluated against.
    #[must_use]
    pub fn order(&self) -> &OrderMap {
        &self.order
    }

    /// The completion predicate.
    #[must_use]
    pub fn completion(&self) -> &Predicate {
        &self.completion
    }

    /// Number of regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of real checks, not counting events.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.locations.iter().filter(|l| !l.is_event()).count()
    }

    /// Number of checks with no item fixed to them.
    #[must_use]
    pub fn unfilled_check_count(&self) -> usize {
        self.locations
            .iter()
            .filter(|l| !l.is_event() && l.locked_item.is_none())
            .count()
    }

    pub(crate) fn location_at(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }
}
