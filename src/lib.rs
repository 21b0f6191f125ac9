//! # kingdom-logic
//!
//! Seed logic for a kingdom-route randomizer: which kingdoms a run visits
//! and in what order, what the player must hold to enter each region, and
//! when the seed counts as finished.
//!
//! ## Design Principles
//!
//! 1. **Resolve, then evaluate**: options and the route order are resolved
//!    once before the graph exists. The graph is never mutated afterwards.
//!
//! 2. **Predicates are data**: every gate is a serializable `Predicate`
//!    interpreted against a collection snapshot and the resolved order.
//!
//! 3. **Fail before building**: infeasible options abort generation with an
//!    error carrying the offending mapping. There is no degraded mode.
//!
//! ## Modules
//!
//! - `core`: options, errors, deterministic RNG
//! - `catalog`: kingdoms, classes, item and location registries
//! - `logic`: collections and predicates
//! - `order`: route order map and solver
//! - `graph`: region graph, builder and reachability
//! - `goal`: completion predicates
//! - `world`: generation pipeline and item pool

pub mod core;
pub mod catalog;
pub mod logic;
pub mod order;
pub mod graph;
pub mod goal;
pub mod world;

// Re-export commonly used types
pub use crate::core::{
    GenRng, GenerationError, GoalCondition, LogicConfig, PotionSanity, ShopSanity,
    UpgradeSanity,
};

pub use crate::catalog::{
    Area, ClassName, ItemCatalog, ItemClassification, ItemId, Kingdom, LocationCatalog,
    LocationId, TokenGroup,
};

pub use crate::logic::{Collection, Inventory, LogicContext, Predicate, PredicateEvaluator};

pub use crate::order::{solve_order, OrderMap};

pub use crate::graph::{build_graph, Graph, Location, Region, RegionId, Transition};

pub use crate::goal::{completion_predicate, goal_predicate};

pub use crate::world::{Generation, ItemPool, SlotData};
